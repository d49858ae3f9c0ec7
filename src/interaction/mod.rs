//! Pointer-event state machine for the two slider handles.
//!
//! [`transition`] is a pure function of `(mode, event, handle offsets)`; it
//! never touches the value model. The effect it returns tells the caller what
//! to do next (highlight a handle, propose a move, notify observers).

use serde::{Deserialize, Serialize};

use crate::core::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Hover(Handle),
    Dragging(Handle),
}

impl InteractionMode {
    /// Handle currently highlighted or grabbed, if any.
    #[must_use]
    pub fn active_handle(self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::Hover(handle) | Self::Dragging(handle) => Some(handle),
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Rule used to pick the handle a free pointer position acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleSelection {
    /// The handle drawn to the left of the pointer; `Until` wins when the
    /// pointer is right of both.
    #[default]
    LeftOfPointer,
    /// The handle drawn closest to the pointer; ties go to `Until`.
    Nearest,
}

/// Left pixel offsets at which both handles are currently drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleOffsets {
    pub from: f64,
    pub until: f64,
}

impl HandleSelection {
    #[must_use]
    pub fn select(self, x: f64, offsets: HandleOffsets) -> Handle {
        match self {
            Self::LeftOfPointer => {
                if x > offsets.until {
                    Handle::Until
                } else {
                    Handle::From
                }
            }
            Self::Nearest => {
                if (x - offsets.from).abs() < (x - offsets.until).abs() {
                    Handle::From
                } else {
                    Handle::Until
                }
            }
        }
    }
}

/// Identity token of the element a drag started on, supplied by the pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    FromHandle,
    UntilHandle,
    Track,
    Axis,
}

impl PointerTarget {
    #[must_use]
    pub fn handle(self) -> Option<Handle> {
        match self {
            Self::FromHandle => Some(Handle::From),
            Self::UntilHandle => Some(Handle::Until),
            Self::Track | Self::Axis => None,
        }
    }
}

/// Pointer input; `x` is the pixel offset from the track's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64 },
    Leave,
    Click { x: f64 },
    DragStart { target: PointerTarget },
    Drag { x: f64 },
    DragEnd,
}

/// Whether an accepted move raises the change notification right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyPolicy {
    OnAccept,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionEffect {
    None,
    Highlight(Handle),
    ClearHighlight,
    MoveHandle {
        handle: Handle,
        x: f64,
        notify: NotifyPolicy,
    },
    /// Notify observers with the current value.
    Commit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub mode: InteractionMode,
    pub effect: InteractionEffect,
}

impl Transition {
    fn stay(mode: InteractionMode) -> Self {
        Self {
            mode,
            effect: InteractionEffect::None,
        }
    }
}

/// Computes the next mode and the effect to apply for one pointer event.
///
/// # Panics
///
/// Panics when a drag starts on a target that is not one of the two handles,
/// including while another drag is in progress: the pointer source wired drag
/// behavior to an element it should not have.
#[must_use]
pub fn transition(
    mode: InteractionMode,
    event: PointerEvent,
    offsets: HandleOffsets,
    selection: HandleSelection,
) -> Transition {
    match (mode, event) {
        (InteractionMode::Dragging(handle), PointerEvent::Move { x } | PointerEvent::Drag { x }) => {
            Transition {
                mode,
                effect: InteractionEffect::MoveHandle {
                    handle,
                    x,
                    notify: NotifyPolicy::Never,
                },
            }
        }
        (InteractionMode::Dragging(_), PointerEvent::DragEnd) => Transition {
            mode: InteractionMode::Idle,
            effect: InteractionEffect::Commit,
        },
        (InteractionMode::Dragging(_), PointerEvent::DragStart { target })
            if target.handle().is_none() =>
        {
            panic!("drag started on {target:?}, which is not a slider handle")
        }
        // A drag owns the pointer until it ends.
        (InteractionMode::Dragging(_), _) => Transition::stay(mode),

        (_, PointerEvent::Move { x }) => {
            let handle = selection.select(x, offsets);
            Transition {
                mode: InteractionMode::Hover(handle),
                effect: InteractionEffect::Highlight(handle),
            }
        }
        (_, PointerEvent::Leave) => Transition {
            mode: InteractionMode::Idle,
            effect: InteractionEffect::ClearHighlight,
        },
        (_, PointerEvent::Click { x }) => Transition {
            mode: InteractionMode::Idle,
            effect: InteractionEffect::MoveHandle {
                handle: selection.select(x, offsets),
                x,
                notify: NotifyPolicy::OnAccept,
            },
        },
        (_, PointerEvent::DragStart { target }) => match target.handle() {
            Some(handle) => Transition {
                mode: InteractionMode::Dragging(handle),
                effect: InteractionEffect::Highlight(handle),
            },
            None => panic!("drag started on {target:?}, which is not a slider handle"),
        },
        // Stray drag events without a session.
        (_, PointerEvent::Drag { .. } | PointerEvent::DragEnd) => Transition::stay(mode),
    }
}

/// Interaction runtime state kept by a slider instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    selection: HandleSelection,
    pointer_x: Option<f64>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(HandleSelection::default())
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(selection: HandleSelection) -> Self {
        Self {
            mode: InteractionMode::Idle,
            selection,
            pointer_x: None,
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn selection(self) -> HandleSelection {
        self.selection
    }

    /// Last pointer offset seen while hovering; cleared by any other mode.
    #[must_use]
    pub fn pointer_x(self) -> Option<f64> {
        self.pointer_x
    }

    /// Advances the state machine and returns the effect for the caller to apply.
    pub fn apply(&mut self, event: PointerEvent, offsets: HandleOffsets) -> InteractionEffect {
        let next = transition(self.mode, event, offsets, self.selection);
        self.pointer_x = match (next.mode, event) {
            (InteractionMode::Hover(_), PointerEvent::Move { x }) => Some(x),
            _ => None,
        };
        self.mode = next.mode;
        next.effect
    }
}
