//! Fortune wizard stage controller.
//!
//! A linear state machine that walks the user from their question to an answer:
//!
//! ```text
//! Question ──submit──▶ OuterColorPick ──pick──▶ Animation{n}
//!     ▲                                            │ complete
//!     │ reset                                      ▼
//!  Answer ◀──complete── FinalAnimation{n} ◀──pick── InnerColorPick
//! ```
//!
//! Every accepted action starts a card fade-out and schedules the stage change
//! [`TRANSITION_PAUSE`] later. The pending change is plain data polled from
//! [`Wizard::tick`]; dropping the wizard (leaving the page) drops it too.
//!
//! The animation target for each color is the letter count of its name.

use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use fastrand::Rng;
use heapless::String;
use thiserror::Error;

use crate::animations::Fade;
use crate::colors::{DUSTY_ROSE, LAVENDER, PEACH, PURPLE, SAGE, SOFT_BLUE, TEAL, YELLOW};
use crate::config::{QUESTION_CAPACITY, TRANSITION_PAUSE};
use crate::oscillator::SpeedMultiplier;
use crate::renderers::RendererProps;

// =============================================================================
// Colors and Answers
// =============================================================================

/// A color button on one of the pick stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorChoice {
    /// Label shown on the button.
    pub name: &'static str,
    /// Button fill.
    pub color: Rgb565,
}

impl ColorChoice {
    const fn new(
        name: &'static str,
        color: Rgb565,
    ) -> Self {
        Self { name, color }
    }

    /// Cycles the teller flexes for this color (letters in the name).
    pub fn cycle_count(&self) -> u32 {
        self.name.chars().filter(char::is_ascii_alphabetic).count() as u32
    }
}

/// Colors offered on the outside of the teller.
pub const OUTER_COLORS: [ColorChoice; 4] = [
    ColorChoice::new("Yellow", YELLOW),
    ColorChoice::new("Peach", PEACH),
    ColorChoice::new("Teal", TEAL),
    ColorChoice::new("Purple", PURPLE),
];

/// Colors offered on the inside of the teller.
pub const INNER_COLORS: [ColorChoice; 4] = [
    ColorChoice::new("Blue", SOFT_BLUE),
    ColorChoice::new("Green", SAGE),
    ColorChoice::new("Rose", DUSTY_ROSE),
    ColorChoice::new("Lavender", LAVENDER),
];

/// Everything the fates might say.
pub const FORTUNE_ANSWERS: [&str; 8] = [
    "Nope.",
    "Why not?",
    "If there's any doubt, there's no doubt.",
    "Absolutely!",
    "Ask Roland",
    "Alma would know the answer",
    "That's definitely a maybe",
    "You already know the answer friend :)",
];

/// Pick one answer uniformly at random.
fn draw_answer(rng: &mut Rng) -> &'static str {
    FORTUNE_ANSWERS[rng.usize(..FORTUNE_ANSWERS.len())]
}

// =============================================================================
// Stages and Actions
// =============================================================================

/// One screen of the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stage {
    /// Typing the question.
    #[default]
    Question,
    /// Choosing an outside color.
    OuterColorPick,
    /// First animation, `target` cycles.
    Animation { target: u32 },
    /// Choosing an inside color.
    InnerColorPick,
    /// Final animation, `target` cycles.
    FinalAnimation { target: u32 },
    /// Showing the answer.
    Answer,
}

/// Something the user (or the renderer) did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SubmitQuestion,
    PickOuter(ColorChoice),
    AnimationComplete,
    PickInner(ColorChoice),
    Reset,
}

impl Action {
    /// Short name for log lines.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitQuestion => "submit",
            Self::PickOuter(_) => "outer pick",
            Self::AnimationComplete => "animation complete",
            Self::PickInner(_) => "inner pick",
            Self::Reset => "reset",
        }
    }
}

impl Stage {
    /// The stage `action` leads to, or `None` if it does not apply here.
    pub fn next(
        self,
        action: &Action,
    ) -> Option<Self> {
        match (self, action) {
            (Self::Question, Action::SubmitQuestion) => Some(Self::OuterColorPick),
            (Self::OuterColorPick, Action::PickOuter(color)) => Some(Self::Animation {
                target: color.cycle_count(),
            }),
            (Self::Animation { .. }, Action::AnimationComplete) => Some(Self::InnerColorPick),
            (Self::InnerColorPick, Action::PickInner(color)) => Some(Self::FinalAnimation {
                target: color.cycle_count(),
            }),
            (Self::FinalAnimation { .. }, Action::AnimationComplete) => Some(Self::Answer),
            (Self::Answer, Action::Reset) => Some(Self::Question),
            _ => None,
        }
    }

    /// Short name for log lines and the debug page.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::OuterColorPick => "outer colors",
            Self::Animation { .. } => "animation",
            Self::InnerColorPick => "inner colors",
            Self::FinalAnimation { .. } => "final animation",
            Self::Answer => "answer",
        }
    }

    /// Whether this stage plays the teller.
    #[inline]
    pub const fn is_animation(self) -> bool {
        matches!(self, Self::Animation { .. } | Self::FinalAnimation { .. })
    }

    /// Color buttons shown on this stage, if any.
    pub const fn color_choices(self) -> Option<&'static [ColorChoice; 4]> {
        match self {
            Self::OuterColorPick => Some(&OUTER_COLORS),
            Self::InnerColorPick => Some(&INNER_COLORS),
            _ => None,
        }
    }

    /// Renderer props for this stage, or `None` if it shows no teller.
    pub const fn renderer_props(
        self,
        playing: bool,
    ) -> Option<RendererProps> {
        match self {
            Self::OuterColorPick | Self::InnerColorPick => Some(RendererProps::paused(SpeedMultiplier::DOUBLE)),
            Self::Animation { target } if playing => Some(RendererProps::playing(target, SpeedMultiplier::DOUBLE)),
            Self::Animation { .. } => Some(RendererProps::paused(SpeedMultiplier::DOUBLE)),
            Self::FinalAnimation { target } if playing => Some(RendererProps::playing(target, SpeedMultiplier::TRIPLE)),
            Self::FinalAnimation { .. } => Some(RendererProps::paused(SpeedMultiplier::TRIPLE)),
            Self::Question | Self::Answer => None,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Rejected wizard input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("question is limited to {} bytes", QUESTION_CAPACITY)]
    QuestionFull,

    #[error("a transition is already pending")]
    TransitionPending,

    #[error("{action} is not allowed on the {stage} stage")]
    UnexpectedAction { stage: &'static str, action: &'static str },
}

// =============================================================================
// Wizard
// =============================================================================

/// Stage change waiting for the transition pause to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    /// Stage entered when the timer fires.
    pub next: Stage,
    /// When the timer fires.
    pub fires_at: Instant,
}

impl PendingTransition {
    #[inline]
    fn is_due(
        &self,
        now: Instant,
    ) -> bool {
        now >= self.fires_at
    }
}

/// The fortune wizard state.
pub struct Wizard {
    stage: Stage,
    question: String<QUESTION_CAPACITY>,
    answer: Option<&'static str>,
    selected_inner: Option<ColorChoice>,
    cycle_target: u32,
    playing: bool,
    fade: Fade,
    pending: Option<PendingTransition>,
    rng: Rng,
}

impl Wizard {
    /// Fresh wizard with an entropy-seeded answer generator.
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Fresh wizard with a fixed seed (deterministic answers).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            stage: Stage::Question,
            question: String::new(),
            answer: None,
            selected_inner: None,
            cycle_target: 0,
            playing: false,
            fade: Fade::visible(),
            pending: None,
            rng,
        }
    }

    // -------------------------------------------------------------------------
    // Question editing
    // -------------------------------------------------------------------------

    /// Append a character to the question.
    pub fn push_char(
        &mut self,
        c: char,
    ) -> Result<(), WizardError> {
        self.ensure_editable()?;
        if c.is_control() {
            return Ok(());
        }
        self.question.push(c).map_err(|_| WizardError::QuestionFull)
    }

    /// Delete the last character of the question.
    pub fn backspace(&mut self) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.question.pop();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.pending.is_some() {
            return Err(WizardError::TransitionPending);
        }
        if self.stage != Stage::Question {
            return Err(WizardError::UnexpectedAction {
                stage: self.stage.name(),
                action: "typing",
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply `action` at `now`.
    ///
    /// On success the card starts fading out and the returned stage is entered
    /// after [`TRANSITION_PAUSE`]. Effects that belong to the action itself
    /// (targets, selected color, stopping playback, drawing the answer) happen
    /// immediately.
    pub fn dispatch(
        &mut self,
        action: Action,
        now: Instant,
    ) -> Result<Stage, WizardError> {
        if self.pending.is_some() {
            return Err(WizardError::TransitionPending);
        }
        let next = self.stage.next(&action).ok_or(WizardError::UnexpectedAction {
            stage: self.stage.name(),
            action: action.name(),
        })?;

        match action {
            Action::SubmitQuestion if self.question.trim().is_empty() => {
                return Err(WizardError::EmptyQuestion);
            }
            Action::PickOuter(color) => self.cycle_target = color.cycle_count(),
            Action::PickInner(color) => {
                self.selected_inner = Some(color);
                self.cycle_target = color.cycle_count();
            }
            Action::AnimationComplete => {
                self.playing = false;
                if next == Stage::Answer {
                    self.answer = Some(draw_answer(&mut self.rng));
                }
            }
            Action::SubmitQuestion | Action::Reset => {}
        }

        self.fade.fade_out(now);
        self.pending = Some(PendingTransition {
            next,
            fires_at: now + TRANSITION_PAUSE,
        });
        Ok(next)
    }

    /// Fire the pending transition if it is due. Returns the stage entered.
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> Option<Stage> {
        let pending = self.pending.filter(|pending| pending.is_due(now))?;
        self.pending = None;

        if pending.next == Stage::Question {
            self.question.clear();
            self.answer = None;
            self.selected_inner = None;
            self.cycle_target = 0;
        }
        self.stage = pending.next;
        self.playing = pending.next.is_animation();
        self.fade.fade_in(now);
        Some(self.stage)
    }

    /// Drop the pending transition, if any. Returns whether one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        self.fade = Fade::visible();
        self.pending.take().is_some()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current stage.
    #[inline]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Question text typed so far.
    #[inline]
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    /// Drawn answer, once the final animation has completed.
    #[inline]
    pub const fn answer(&self) -> Option<&'static str> {
        self.answer
    }

    /// Inner color chosen this run.
    #[inline]
    pub const fn selected_inner(&self) -> Option<ColorChoice> {
        self.selected_inner
    }

    /// Cycle target of the upcoming (or current) animation.
    #[inline]
    pub const fn cycle_target(&self) -> u32 {
        self.cycle_target
    }

    /// Transition waiting to fire.
    #[inline]
    pub const fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Card opacity at `now`.
    #[inline]
    pub fn opacity(
        &self,
        now: Instant,
    ) -> f32 {
        self.fade.opacity(now)
    }

    /// Props for the renderer of the current stage.
    #[inline]
    pub const fn renderer_props(&self) -> Option<RendererProps> {
        self.stage.renderer_props(self.playing)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
