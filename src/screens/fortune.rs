//! Fortune wizard page (`/fortune`).
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   Will I find my keys?       │  question heading (after submit)
//! │ ┌──────────────────────────┐ │
//! │ │ ┌──────────────────────┐ │ │
//! │ │ │  fortune teller      │ │ │  300x300 canvas
//! │ │ └──────────────────────┘ │ │
//! │ │ [ Yellow ]  [ Peach  ]   │ │  color buttons (pick stages)
//! │ │ [ Teal   ]  [ Purple ]   │ │  or a caption (animation stages)
//! │ └──────────────────────────┘ │  card, faded between stages
//! │      [ < Back to Home ]      │
//! └──────────────────────────────┘
//! ```
//!
//! The page owns the wizard and the renderer of the current stage. A renderer is
//! mounted every time a stage that shows the teller is entered, so each
//! animation counts from zero. Dropping the page drops both, including any
//! pending transition.

use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};

use crate::animations::Faded;
use crate::colors::{BUTTON_GREEN, PAGE_GREEN, PARCHMENT, WHITE};
use crate::config::{CENTER_X, SCREEN_WIDTH};
use crate::input::{InputEvent, color_index};
use crate::log_line;
use crate::pages::Route;
use crate::profiling::DebugLog;
use crate::renderers::{CANVAS_AREA, InteractiveFortuneRenderer};
use crate::styles::{
    ANSWER_CHAR_WIDTH, ANSWER_STYLE, BODY_CHAR_WIDTH, BODY_STYLE_GREEN, HEADING_CHAR_WIDTH, HEADING_STYLE,
};
use crate::widgets::{Button, draw_text_input, draw_wrapped};
use crate::wizard::{Action, ColorChoice, Stage, Wizard, WizardError};

// =============================================================================
// Layout Constants
// =============================================================================

const HEADING_BASELINE: i32 = 20;
const HEADING_LINE_HEIGHT: i32 = 20;
const HEADING_MAX_CHARS: usize = ((SCREEN_WIDTH - 20) / HEADING_CHAR_WIDTH) as usize;

/// Heading lines. Two consecutive wrapped lines always span more than
/// `HEADING_MAX_CHARS` bytes, so four lines need at least 66 and a full
/// question always fits in three.
const HEADING_LINES: usize = 3;

/// Top of the card, below the last heading line.
const CARD_TOP: i32 = HEADING_BASELINE + (HEADING_LINES as i32 - 1) * HEADING_LINE_HEIGHT + 12;

/// White card holding the stage content.
const CARD_AREA: Rectangle = Rectangle::new(Point::new(10, CARD_TOP), Size::new(320, 400));

/// Top-left of the teller canvas.
const CANVAS_OFFSET: Point = Point::new(20, CARD_TOP + 10);

const PROMPT_BASELINE: i32 = CARD_TOP + 54;
const BODY_MAX_CHARS: usize = (CARD_AREA.size.width / BODY_CHAR_WIDTH) as usize;
const QUESTION_INPUT: Rectangle = Rectangle::new(Point::new(30, CARD_TOP + 80), Size::new(280, 40));
const ASK_BUTTON: Button = Button::new(
    Rectangle::new(Point::new(30, CARD_TOP + 136), Size::new(280, 44)),
    "Ask the Fates",
    BUTTON_GREEN,
);

const CAPTION_BASELINE: i32 = CARD_TOP + 344;

const COLOR_BUTTON_SIZE: Size = Size::new(146, 32);
const COLOR_BUTTON_ORIGIN: Point = Point::new(20, CARD_TOP + 320);
const COLOR_BUTTON_STEP: Point = Point::new(154, 40);

const ANSWER_PANEL: Rectangle = Rectangle::new(Point::new(30, CARD_TOP + 44), Size::new(280, 250));
const ANSWER_BASELINE: i32 = CARD_TOP + 94;
const ANSWER_LINE_HEIGHT: i32 = 26;
const ANSWER_MAX_CHARS: usize = ((ANSWER_PANEL.size.width - 30) / ANSWER_CHAR_WIDTH) as usize;
const RESET_BUTTON: Button = Button::new(
    Rectangle::new(Point::new(50, CARD_TOP + 224), Size::new(240, 44)),
    "Ask Another Question",
    BUTTON_GREEN,
);

const BACK_BUTTON: Button = Button::new(
    Rectangle::new(Point::new(85, CARD_TOP + 412), Size::new(170, 40)),
    "< Back to Home",
    BUTTON_GREEN,
);

/// Cursor blink half-period in milliseconds.
const CURSOR_BLINK_MS: f64 = 500.0;

const QUESTION_PROMPT: &str = "What question do you have for the fates?";
const QUESTION_PLACEHOLDER: &str = "Enter your question...";
const CONSIDERING_CAPTION: &str = "The fates are considering your question...";
const REVEALING_CAPTION: &str = "The fates are revealing your answer...";

/// Area of color button `index` (row-major, two per row).
const fn color_button_area(index: usize) -> Rectangle {
    let column = (index % 2) as i32;
    let row = (index / 2) as i32;
    Rectangle::new(
        Point::new(
            COLOR_BUTTON_ORIGIN.x + column * COLOR_BUTTON_STEP.x,
            COLOR_BUTTON_ORIGIN.y + row * COLOR_BUTTON_STEP.y,
        ),
        COLOR_BUTTON_SIZE,
    )
}

/// Color chosen by `event` among four buttons, if any.
fn picked_index(event: InputEvent) -> Option<usize> {
    match event {
        InputEvent::Char(c) => color_index(c),
        InputEvent::Click(point) => (0..4).find(|&i| color_button_area(i).contains(point)),
        _ => None,
    }
}

// =============================================================================
// Fortune Page
// =============================================================================

/// The fortune wizard page.
pub struct FortunePage {
    wizard: Wizard,
    renderer: Option<InteractiveFortuneRenderer>,
    epoch: Instant,
}

impl FortunePage {
    /// Fresh page mounted at `now`.
    pub fn new(now: Instant) -> Self {
        Self::with_wizard(Wizard::new(), now)
    }

    /// Fresh page with deterministic answers.
    pub fn with_seed(
        seed: u64,
        now: Instant,
    ) -> Self {
        Self::with_wizard(Wizard::with_seed(seed), now)
    }

    fn with_wizard(
        wizard: Wizard,
        now: Instant,
    ) -> Self {
        Self {
            wizard,
            renderer: None,
            epoch: now,
        }
    }

    #[inline]
    pub const fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Renderer of the current stage, if it shows the teller.
    #[inline]
    pub const fn renderer(&self) -> Option<&InteractiveFortuneRenderer> {
        self.renderer.as_ref()
    }

    /// Milliseconds since the page was mounted (the renderers' clock).
    fn time_ms(
        &self,
        now: Instant,
    ) -> f64 {
        now.saturating_duration_since(self.epoch).as_secs_f64() * 1000.0
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle an input event. Returns the route to navigate to.
    pub fn handle(
        &mut self,
        event: InputEvent,
        now: Instant,
        log: &mut DebugLog,
    ) -> Option<Route> {
        let back = match event {
            InputEvent::Back => true,
            InputEvent::Click(point) => BACK_BUTTON.contains(point),
            _ => false,
        };
        if back {
            if self.wizard.cancel_pending() {
                log.push("transition cancelled");
            }
            return Some(Route::Home);
        }

        let result = match (self.wizard.stage(), event) {
            (Stage::Question, InputEvent::Char(c)) => self.wizard.push_char(c),
            (Stage::Question, InputEvent::Backspace) => self.wizard.backspace(),
            (Stage::Question, InputEvent::Submit) => self.dispatch(Action::SubmitQuestion, now, log),
            (Stage::Question, InputEvent::Click(point)) if ASK_BUTTON.contains(point) => {
                self.dispatch(Action::SubmitQuestion, now, log)
            }
            (stage @ (Stage::OuterColorPick | Stage::InnerColorPick), event) => {
                match (stage.color_choices(), picked_index(event)) {
                    (Some(choices), Some(index)) => {
                        let choice: ColorChoice = choices[index];
                        let action = if stage == Stage::OuterColorPick {
                            Action::PickOuter(choice)
                        } else {
                            Action::PickInner(choice)
                        };
                        self.dispatch(action, now, log)
                    }
                    _ => Ok(()),
                }
            }
            (Stage::Answer, InputEvent::Submit) => self.dispatch(Action::Reset, now, log),
            (Stage::Answer, InputEvent::Click(point)) if RESET_BUTTON.contains(point) => {
                self.dispatch(Action::Reset, now, log)
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            log_line!(log, "wizard: {err}");
        }
        None
    }

    fn dispatch(
        &mut self,
        action: Action,
        now: Instant,
        log: &mut DebugLog,
    ) -> Result<(), WizardError> {
        let next = self.wizard.dispatch(action, now)?;
        if let Action::PickOuter(choice) | Action::PickInner(choice) = action {
            log_line!(log, "picked {} ({} cycles)", choice.name, choice.cycle_count());
        }
        log_line!(log, "{}: {} -> {}", action.name(), self.wizard.stage().name(), next.name());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Frame Update
    // -------------------------------------------------------------------------

    /// Advance one frame. Returns the stage entered this frame, if any.
    pub fn update(
        &mut self,
        now: Instant,
        log: &mut DebugLog,
    ) -> Option<Stage> {
        let time_ms = self.time_ms(now);

        let entered = self.wizard.tick(now);
        if let Some(stage) = entered {
            log_line!(log, "stage: {}", stage.name());
            self.renderer = self
                .wizard
                .renderer_props()
                .map(|props| InteractiveFortuneRenderer::new(props, time_ms));
        }

        let completed = self.renderer.as_mut().and_then(|renderer| renderer.update(time_ms));
        if let Some(done) = completed {
            log_line!(log, "animation done after {} cycles", done.cycles);
            if let Err(err) = self.dispatch(Action::AnimationComplete, now, log) {
                log_line!(log, "wizard: {err}");
            }
        }

        entered
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn draw<D>(
        &self,
        target: &mut D,
        now: Instant,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(PAGE_GREEN).ok();

        let stage = self.wizard.stage();
        if stage != Stage::Question {
            draw_wrapped::<_, HEADING_LINES>(
                target,
                self.wizard.question(),
                CENTER_X,
                HEADING_BASELINE,
                HEADING_LINE_HEIGHT,
                HEADING_MAX_CHARS,
                HEADING_STYLE,
            );
        }

        {
            let mut card = Faded::new(target, PAGE_GREEN, self.wizard.opacity(now));
            RoundedRectangle::new(CARD_AREA, CornerRadii::new(Size::new(8, 8)))
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(&mut card)
                .ok();

            match stage {
                Stage::Question => self.draw_question(&mut card, now),
                Stage::OuterColorPick | Stage::InnerColorPick => {
                    self.draw_teller(&mut card);
                    if let Some(choices) = stage.color_choices() {
                        for (i, choice) in choices.iter().enumerate() {
                            Button::new(color_button_area(i), choice.name, choice.color).draw(&mut card);
                        }
                    }
                }
                Stage::Animation { .. } => {
                    self.draw_teller(&mut card);
                    draw_caption(&mut card, CONSIDERING_CAPTION);
                }
                Stage::FinalAnimation { .. } => {
                    self.draw_teller(&mut card);
                    draw_caption(&mut card, REVEALING_CAPTION);
                }
                Stage::Answer => self.draw_answer(&mut card),
            }
        }

        BACK_BUTTON.draw(target);
    }

    fn draw_teller<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(renderer) = &self.renderer {
            renderer.draw(&mut target.translated(CANVAS_OFFSET).clipped(&CANVAS_AREA));
        }
    }

    fn draw_question<D>(
        &self,
        target: &mut D,
        now: Instant,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_wrapped::<_, 2>(
            target,
            QUESTION_PROMPT,
            CENTER_X,
            PROMPT_BASELINE,
            16,
            BODY_MAX_CHARS,
            BODY_STYLE_GREEN,
        );

        let blink_on = (self.time_ms(now) / CURSOR_BLINK_MS) as u64 % 2 == 0;
        let cursor_visible = blink_on && self.wizard.pending().is_none();
        draw_text_input(
            target,
            QUESTION_INPUT,
            self.wizard.question(),
            QUESTION_PLACEHOLDER,
            cursor_visible,
        );
        ASK_BUTTON.draw(target);
    }

    fn draw_answer<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let panel = PrimitiveStyleBuilder::new()
            .fill_color(PARCHMENT)
            .stroke_color(BUTTON_GREEN)
            .stroke_width(2)
            .build();
        RoundedRectangle::new(ANSWER_PANEL, CornerRadii::new(Size::new(8, 8)))
            .into_styled(panel)
            .draw(target)
            .ok();

        if let Some(answer) = self.wizard.answer() {
            draw_wrapped::<_, 4>(
                target,
                answer,
                CENTER_X,
                ANSWER_BASELINE,
                ANSWER_LINE_HEIGHT,
                ANSWER_MAX_CHARS,
                ANSWER_STYLE,
            );
        }
        RESET_BUTTON.draw(target);
    }
}

fn draw_caption<D>(
    target: &mut D,
    caption: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_wrapped::<_, 2>(
        target,
        caption,
        CENTER_X,
        CAPTION_BASELINE,
        16,
        BODY_MAX_CHARS,
        BODY_STYLE_GREEN,
    );
}

// =============================================================================
// Unit Tests
// =============================================================================
