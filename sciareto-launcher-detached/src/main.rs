use color_eyre::Result;
use sciareto_launcher::LauncherConfig;

fn main() -> Result<()> {
    sciareto_launcher::launch(LauncherConfig::detached())
}
