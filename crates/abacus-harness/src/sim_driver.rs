//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`abacus_app::Runtime`] orchestration code runs in both production and
//! simulation, with a virtual clock in place of wall time.

use std::{collections::VecDeque, fmt, ops::Sub, time::Duration};

use abacus_app::{App, AppEvent, Driver, KeyInput};

use crate::invariants::{EngineSnapshot, InvariantRegistry, Violation};

/// Point on the simulation's virtual clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    /// Time elapsed since the simulation started.
    pub fn elapsed(self) -> Duration {
        self.0
    }
}

impl Sub for VirtualInstant {
    type Output = Duration;

    fn sub(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub enum SimDriverError {
    /// An invariant failed on a rendered frame.
    Invariant {
        /// Frame number (zero is the initial render).
        frame: usize,
        /// Every failed check.
        violations: Vec<Violation>,
    },
}

impl fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invariant { frame, violations } => {
                write!(f, "frame {frame}: {} invariant violation(s)", violations.len())?;
                for violation in violations {
                    write!(f, "; {violation}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for SimDriverError {}

/// What the displays showed at one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Virtual time of the render.
    pub at: VirtualInstant,
    /// Main display.
    pub result_text: String,
    /// Secondary display with operator indicator.
    pub sub_result_line: String,
    /// Labels of highlighted keypad buttons.
    pub pressed: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Key(KeyInput),
    Button(usize),
    Advance(Duration),
}

/// Simulation driver for deterministic testing.
///
/// Steps are scripted up front. Once the script runs out the driver sends
/// Ctrl+C so [`abacus_app::Runtime::run`] always terminates.
pub struct SimDriver {
    script: VecDeque<Step>,
    clock: VirtualInstant,
    frames: Vec<RenderedFrame>,
    invariants: Option<InvariantRegistry>,
    stopped: bool,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver with an empty script.
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            clock: VirtualInstant::default(),
            frames: Vec::new(),
            invariants: None,
            stopped: false,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Script one key press.
    #[must_use]
    pub fn key(mut self, key: KeyInput) -> Self {
        self.script.push_back(Step::Key(key));
        self
    }

    /// Script a key press per character.
    #[must_use]
    pub fn type_str(mut self, keys: &str) -> Self {
        self.script.extend(keys.chars().map(|c| Step::Key(KeyInput::Char(c))));
        self
    }

    /// Script a keypad click.
    #[must_use]
    pub fn click(mut self, index: usize) -> Self {
        self.script.push_back(Step::Button(index));
        self
    }

    /// Script a pause. The runtime sees a tick at the new time.
    #[must_use]
    pub fn advance(mut self, by: Duration) -> Self {
        self.script.push_back(Step::Advance(by));
        self
    }

    /// Every frame rendered so far.
    pub fn frames(&self) -> &[RenderedFrame] {
        &self.frames
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for &mut SimDriver {
    type Error = SimDriverError;
    type Instant = VirtualInstant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent<VirtualInstant>>, Self::Error> {
        let at = self.clock;
        match self.script.pop_front() {
            Some(Step::Key(key)) => Ok(Some(AppEvent::Key { key, at })),
            Some(Step::Button(index)) => Ok(Some(AppEvent::Button { index, at })),
            Some(Step::Advance(by)) => {
                self.clock = VirtualInstant(self.clock.0.saturating_add(by));
                Ok(None)
            },
            None => Ok(Some(AppEvent::Key { key: KeyInput::Interrupt, at })),
        }
    }

    fn now(&self) -> VirtualInstant {
        self.clock
    }

    fn render(&mut self, app: &App<VirtualInstant>) -> Result<(), Self::Error> {
        if let Some(registry) = &self.invariants
            && let Err(violations) = registry.check_all(&EngineSnapshot::capture(app.calculator()))
        {
            return Err(SimDriverError::Invariant { frame: self.frames.len(), violations });
        }

        let keypad = app.keypad();
        let pressed = keypad
            .buttons()
            .iter()
            .enumerate()
            .filter(|(index, _)| keypad.is_pressed(*index))
            .map(|(_, button)| button.label())
            .collect();

        self.frames.push(RenderedFrame {
            at: self.clock,
            result_text: app.result_text(),
            sub_result_line: app.sub_result_line(),
            pressed,
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
