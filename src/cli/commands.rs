//! Command dispatch: from parsed arguments to a preview or a created tree

use std::io::Write;

use tracing::{debug, instrument, trace};

use crate::application::services::LayoutGenerator;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::ProjectTarget;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run one invocation: resolve, check for collision, then preview or create.
#[instrument(level = "debug", skip_all, fields(dry_run = cli.dry_run))]
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let name = cli
        .project_name
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing project name".to_string()))?;
    let base = cli
        .base_path
        .clone()
        .or_else(|| container.settings.base_dir.clone());
    debug!("project_name: {:?}, base: {:?}", name, base);

    let generator = &container.generator;
    let target = generator.resolve_target(name, base.as_deref())?;
    generator.check_collision(&target)?;

    if cli.dry_run {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return write_preview(generator, &target, &mut out);
    }

    create(generator, &target, &container.settings)
}

/// Write the planned tree to `out`.
pub fn write_preview(
    generator: &LayoutGenerator,
    target: &ProjectTarget,
    out: &mut impl Write,
) -> CliResult<()> {
    let text = generator.render_preview(target);
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| InfraError::io("write preview", e))?;
    Ok(())
}

fn create(generator: &LayoutGenerator, target: &ProjectTarget, settings: &Settings) -> CliResult<()> {
    for path in generator.planned_paths(target) {
        trace!("planned: {}", path.display());
    }

    generator.materialize(target)?;

    output::created(&target.root);
    if settings.next_steps {
        print_next_steps(target);
    }
    Ok(())
}

fn print_next_steps(target: &ProjectTarget) {
    let steps = [
        format!("cd {}", target.root.display()),
        "Update README.md and other files with your project information".to_string(),
        "Modify the project structure as needed for your specific requirements".to_string(),
    ];
    output::numbered("Next steps:", &steps);
}
