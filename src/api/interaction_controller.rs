use tracing::{trace, warn};

use crate::interaction::{InteractionEffect, NotifyPolicy, PointerEvent, PointerTarget};
use crate::render::Renderer;

use super::TimeSlider;
use super::validation::validate_pointer_x;

/// What a single pointer event did to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub value_changed: bool,
    pub notified: bool,
}

impl<R: Renderer> TimeSlider<R> {
    /// Feeds one pointer event through the state machine and applies its effect.
    ///
    /// Events carrying a non-finite offset are dropped.
    ///
    /// # Panics
    ///
    /// Panics when `PointerEvent::DragStart` targets something other than a
    /// handle.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventOutcome {
        if let PointerEvent::Move { x } | PointerEvent::Click { x } | PointerEvent::Drag { x } =
            event
        {
            if let Err(err) = validate_pointer_x(x) {
                warn!(error = %err, ?event, "ignoring pointer event");
                return EventOutcome::default();
            }
        }

        let offsets = self.handle_offsets();
        let effect = self.interaction.apply(event, offsets);
        trace!(?event, ?effect, mode = ?self.interaction.mode(), "pointer event");

        let outcome = match effect {
            InteractionEffect::None => EventOutcome::default(),
            InteractionEffect::Highlight(_) | InteractionEffect::ClearHighlight => {
                self.refresh();
                EventOutcome::default()
            }
            InteractionEffect::MoveHandle { handle, x, notify } => {
                let candidate = self.scale.offset_to_value(x, self.track_width);
                let value_changed = self.model.propose_move(handle, candidate);
                if value_changed {
                    self.refresh();
                }
                let notified = value_changed && notify == NotifyPolicy::OnAccept;
                if notified {
                    self.notify_change();
                }
                EventOutcome {
                    value_changed,
                    notified,
                }
            }
            InteractionEffect::Commit => {
                self.notify_change();
                EventOutcome {
                    value_changed: false,
                    notified: true,
                }
            }
        };

        if !self.interaction.mode().is_dragging() {
            self.apply_pending_resize();
        }
        outcome
    }

    /// Pointer moved over the slider; highlights a handle, or moves the grabbed one.
    pub fn pointer_move(&mut self, x: f64) -> EventOutcome {
        self.handle_event(PointerEvent::Move { x })
    }

    /// Pointer left the slider; clears the highlight.
    pub fn pointer_leave(&mut self) -> EventOutcome {
        self.handle_event(PointerEvent::Leave)
    }

    /// Jumps the selected handle to `x` and notifies when the move is accepted.
    pub fn click(&mut self, x: f64) -> EventOutcome {
        self.handle_event(PointerEvent::Click { x })
    }

    /// Starts dragging the handle identified by `target`.
    ///
    /// # Panics
    ///
    /// Panics when `target` is not one of the two handles.
    pub fn drag_start(&mut self, target: PointerTarget) -> EventOutcome {
        self.handle_event(PointerEvent::DragStart { target })
    }

    pub fn drag(&mut self, x: f64) -> EventOutcome {
        self.handle_event(PointerEvent::Drag { x })
    }

    /// Ends the drag and notifies once with the current value, moved or not.
    pub fn drag_end(&mut self) -> EventOutcome {
        self.handle_event(PointerEvent::DragEnd)
    }
}
