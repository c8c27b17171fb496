use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pointer input recognized by plot components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInput {
    // Graph area.
    LeftMouseDown,
    LeftMouseUp,
    LeftMouseDragStart,
    LeftMouseDragEnd,
    LeftMouseDrag,
    LeftMouseDouble,
    RightMouseDown,
    RightMouseUp,
    RightMouseDrag,
    MiddleMouseDown,
    MiddleMouseUp,
    MiddleMouseDrag,
    MouseScrollUp,
    MouseScrollDown,

    // Tracepoints.
    LeftMouseDownTracepoint,
    LeftMouseUpTracepoint,
    LeftMouseDragTracepoint,
    LeftMouseDoubleTracepoint,

    // Trace labels.
    LeftMouseDownTraceLabel,
    LeftMouseUpTraceLabel,
    LeftMouseDragTraceLabel,

    // Legend.
    LeftMouseDownLegend,
    LeftMouseUpLegend,
    LeftMouseDragLegend,
}

/// Semantic action resolved from a [`UserInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInputAction {
    CreateTracepoint,
    MoveTracepoint,
    MoveTracepointLabel,
    SelectTracepoint,
    SelectMultipleTracepoints,

    ZoomSelectedArea,
    ZoomIn,
    ZoomOut,
    ZoomReset,

    /// Anchors the selection rectangle.
    SelectAreaStart,
    /// Moves the free corner of the selection rectangle.
    SelectAreaDraw,

    CreateMovableGraphPoint,
    MoveMovableGraphPoint,
    RemoveMovableGraphPoint,

    MoveLegend,

    #[default]
    None,
}

/// Whether a mouse drag just started, is ongoing, or is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseDragState {
    Start,
    Drag,
    #[default]
    None,
}

impl MouseDragState {
    /// Next state given whether the button is still being dragged.
    ///
    /// A drag always passes through `Start` exactly once before `Drag`.
    #[must_use]
    pub fn next(self, dragging: bool) -> Self {
        match (self, dragging) {
            (_, false) => Self::None,
            (Self::None, true) => Self::Start,
            (Self::Start | Self::Drag, true) => Self::Drag,
        }
    }

    /// Graph-area left-button input for this drag state.
    #[must_use]
    pub fn left_mouse_input(self) -> Option<UserInput> {
        match self {
            Self::Start => Some(UserInput::LeftMouseDragStart),
            Self::Drag => Some(UserInput::LeftMouseDrag),
            Self::None => None,
        }
    }
}

const DEFAULT_BINDINGS: &[(UserInput, UserInputAction)] = &[
    (UserInput::LeftMouseUp, UserInputAction::CreateTracepoint),
    (UserInput::LeftMouseDragStart, UserInputAction::SelectAreaStart),
    (UserInput::LeftMouseDrag, UserInputAction::SelectAreaDraw),
    (UserInput::LeftMouseDragEnd, UserInputAction::ZoomSelectedArea),
    (UserInput::LeftMouseDouble, UserInputAction::ZoomReset),
    (UserInput::RightMouseDown, UserInputAction::ZoomReset),
    (UserInput::MiddleMouseDown, UserInputAction::CreateMovableGraphPoint),
    (UserInput::MiddleMouseDrag, UserInputAction::MoveMovableGraphPoint),
    (UserInput::MouseScrollUp, UserInputAction::ZoomIn),
    (UserInput::MouseScrollDown, UserInputAction::ZoomOut),
    (UserInput::LeftMouseDownTracepoint, UserInputAction::SelectTracepoint),
    (UserInput::LeftMouseDragTracepoint, UserInputAction::MoveTracepoint),
    (
        UserInput::LeftMouseDoubleTracepoint,
        UserInputAction::SelectMultipleTracepoints,
    ),
    (
        UserInput::LeftMouseDragTraceLabel,
        UserInputAction::MoveTracepointLabel,
    ),
    (UserInput::LeftMouseDragLegend, UserInputAction::MoveLegend),
];

/// Input-to-action bindings, kept in insertion order for stable serialization.
///
/// Inputs without a binding resolve to [`UserInputAction::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputActionMap {
    bindings: IndexMap<UserInput, UserInputAction>,
}

impl Default for InputActionMap {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS.iter().copied().collect(),
        }
    }
}

impl InputActionMap {
    /// Map with no bindings at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn action_for(&self, input: UserInput) -> UserInputAction {
        self.bindings
            .get(&input)
            .copied()
            .unwrap_or(UserInputAction::None)
    }

    /// Binds `input` to `action`, returning the previous action.
    pub fn set_action(&mut self, input: UserInput, action: UserInputAction) -> UserInputAction {
        debug!(?input, ?action, "override input binding");
        self.bindings
            .insert(input, action)
            .unwrap_or(UserInputAction::None)
    }

    pub fn clear_action(&mut self, input: UserInput) {
        self.bindings.shift_remove(&input);
    }

    pub fn reset_to_defaults(&mut self) {
        debug!("reset input bindings to defaults");
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserInput, UserInputAction)> + '_ {
        self.bindings.iter().map(|(input, action)| (*input, *action))
    }
}
