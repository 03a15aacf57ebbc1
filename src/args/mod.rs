use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// Checks that span more than one flag or that clap can't express.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration is invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.my_team.trim().is_empty() {
            return Err("A team to follow is required".to_string());
        }
        validation::check_api_base(&self.api_base)?;
        if self.fetch_timeout_secs == 0 {
            return Err("The fetch timeout must be at least one second".to_string());
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            addr: args.addr,
            refresh_hour: args.refresh_hour,
            my_team: args.my_team.trim().to_string(),
            timezone: args.timezone,
            offseason: args.offseason,
            json_log: args.json_log,
            api_base: args.api_base,
            fetch_timeout_secs: args.fetch_timeout_secs,
            shutdown_grace_secs: args.shutdown_grace_secs,
        }
    }
}
