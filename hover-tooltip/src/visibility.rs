use tracing::trace;

/// How a tooltip reacts to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Clicking the trigger toggles the tooltip. Hovering is ignored.
    pub show_on_click: bool,
    /// The tooltip stays open when the pointer leaves, until a pointer goes down outside of it.
    pub persistent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Trigger,
    Tooltip,
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    TriggerEnter,
    TriggerLeave,
    TriggerClick,
    PointerDown(Region),
}

pub fn next_visibility(visible: bool, event: PointerEvent, interaction: Interaction) -> bool {
    let Interaction { show_on_click, persistent } = interaction;

    match event {
        PointerEvent::TriggerEnter if !show_on_click => true,
        PointerEvent::TriggerLeave if !show_on_click && !persistent => false,
        PointerEvent::TriggerClick if show_on_click => !visible,
        PointerEvent::PointerDown(Region::Outside) if persistent => false,
        _ => visible,
    }
}

/// Holds the visibility of one tooltip. Created hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityController {
    visible: bool,
    interaction: Interaction,
    generation: u64,
}

impl VisibilityController {

    pub fn new(interaction: Interaction) -> Self {
        Self {
            visible: false,
            interaction,
            generation: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Number of visibility changes so far. Deferred work captures it,
    /// to find out whether another change happened in the meantime.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn set_interaction(&mut self, interaction: Interaction) {
        self.interaction = interaction;
    }

    /// Applies `event` and returns whether the visibility changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let next = next_visibility(self.visible, event, self.interaction);
        let changed = next != self.visible;
        if changed {
            self.generation += 1;
            trace!("Tooltip visibility changed from {} to {next} on {event:?}.", self.visible);
        }
        self.visible = next;
        changed
    }
}
