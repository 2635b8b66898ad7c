//! Command handlers for `scorpionctl`.

use scorpion_core::DefaultsController;
use tracing::info;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// `status`: read the device's current value for every default and
/// render the comparison.
pub async fn status(
    controller: &DefaultsController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    info!(identity = %controller.identity(), "reading current status");
    let status = controller.current_status().await?;

    output::print_output(&output::render_status(&global.output, &status), global.quiet);
    Ok(())
}

/// `apply`: clear the routing bank, push the derived defaults, report
/// anything the device rejected.
pub async fn apply(
    controller: &DefaultsController,
    global: &GlobalOpts,
    factory: bool,
) -> Result<(), CliError> {
    info!(identity = %controller.identity(), "applying defaults");
    let result = controller.set_defaults(factory).await?;

    output::print_output(&output::render_batch(&global.output, &result), global.quiet);

    if !result.all_applied() {
        return Err(CliError::DefaultsRejected {
            count: result.failures.len(),
        });
    }
    Ok(())
}
