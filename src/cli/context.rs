use dialoguer::theme::ColorfulTheme;
use tracing::warn;

use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::currency::LocaleConfig;
use crate::errors::CourseError;
use crate::pricing::PriceEngine;
use crate::wizard::{CourseVariant, WizardController, WizardField};

/// Whether the shell reads prompts from a terminal or commands from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Session state shared by the script and interactive front ends.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) variant: CourseVariant,
    pub(crate) wizard: WizardController,
    pub(crate) engine: PriceEngine,
    pub(crate) locale: LocaleConfig,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CourseError> {
        let manager = ConfigManager::from_env()?;
        let config = manager.load()?;
        Self::from_config(mode, &config)
    }

    pub fn from_config(mode: CliMode, config: &Config) -> Result<Self, CourseError> {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
            quiet_mode: false,
        });
        Ok(Self {
            mode,
            variant: config.variant,
            wizard: WizardController::new(config.variant.steps()),
            engine: config.price_engine()?,
            locale: config.locale_config(),
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Fields the active plan asks about, in step order.
    pub(crate) fn plan_fields(&self) -> Vec<WizardField> {
        self.wizard
            .plan()
            .steps()
            .iter()
            .filter_map(|step| step.kind.field())
            .filter(|field| *field != WizardField::ComplimentaryAddons)
            .collect()
    }

    /// Prints a command failure. Only I/O and prompt failures end the shell.
    pub(crate) fn report_error(&self, err: CourseError) -> Result<(), CourseError> {
        match err {
            CourseError::UnknownOption { .. } => {
                warn!(error = %err, "rejected option");
                output::error(&err);
                if let Some(suggestion) = err.suggestion() {
                    output::hint(format!("Did you mean `{suggestion}`?"));
                }
                Ok(())
            }
            CourseError::InvalidArgument(message) => {
                warn!(%message, "rejected command");
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CourseError::Serde(_) | CourseError::Config(_) => {
                output::error(&err);
                Ok(())
            }
            fatal @ (CourseError::Io(_) | CourseError::Prompt(_)) => Err(fatal),
        }
    }
}
