//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, AppConfig, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: AppConfig) -> Self {
        Self { driver, app: App::new(config) }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Renders once up front, then for every cycle:
    /// 1. Polls for an input event from the driver
    /// 2. Falls back to a tick at the driver's current time when none is ready
    /// 3. Executes the actions the App returns
    ///
    /// Returns the final App state. The driver is stopped whether the loop
    /// ends by quitting or by error.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App<D::Instant>, D::Error> {
        let outcome = self.event_loop().await;
        self.driver.stop();

        match outcome {
            Ok(()) => {
                tracing::info!("Calculator stopped at {}", self.app.result_text());
                Ok(self.app)
            },
            Err(e) => {
                tracing::warn!("Calculator stopped on driver error: {e}");
                Err(e)
            },
        }
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                return Ok(());
            }
        }
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let event = match self.driver.poll_event().await? {
            Some(event) => event,
            None => AppEvent::Tick(self.driver.now()),
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }
}
