use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::presentation::position::{Axis, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Animation {
    #[default]
    Smooth,
    Pop,
    Fade,
    Scale,
    Elastic,
    Shift,
}

/// Translation along one axis, as understood by CSS `translate()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Px(f64),
    Percent(f64),
}

impl Offset {
    /// Keeps the tooltip centred on the trigger along the axis it does not slide on.
    pub const CENTERED: Offset = Offset::Percent(-50.0);

    fn px(value: f64) -> Self {
        // Normalises -0.0, so that it never renders as "-0px".
        Offset::Px(if value == 0.0 { 0.0 } else { value })
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Px(value) => write!(f, "{value}px"),
            Offset::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// One endpoint of the show/hide interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub opacity: f64,
    pub x: Offset,
    pub y: Offset,
    pub scale: Option<f64>,
}

impl MotionState {

    pub fn transform(&self) -> String {
        let translate = format!("translate({}, {})", self.x, self.y);
        match self.scale {
            Some(scale) => format!("{translate} scale({scale})"),
            None => translate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Spring {
        damping: f64,
        stiffness: f64,
        mass: f64,
    },
    Tween {
        ease: &'static str,
    },
}

impl Transition {

    fn spring(damping: f64, stiffness: f64) -> Self {
        Transition::Spring { damping, stiffness, mass: 1.0 }
    }

    /// CSS timing function approximating this transition.
    ///
    /// CSS transitions cannot express a spring, so springs are mapped onto a bezier
    /// curve by their damping ratio. Strongly under-damped springs overshoot.
    pub fn timing_function(&self) -> &'static str {
        match self {
            Transition::Spring { damping, stiffness, mass } => {
                let damping_ratio = damping / (2.0 * (stiffness * mass).sqrt());
                if damping_ratio < 0.5 {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)"
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)"
                }
            }
            Transition::Tween { ease } => ease,
        }
    }
}

/// The pair of named states the overlay is animated between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub hidden: MotionState,
    pub visible: MotionState,
    pub transition: Transition,
}

impl AnimationSpec {

    /// Inline style of the overlay. Only the transition into the visible state is delayed.
    pub fn style(&self, shown: bool, duration: f64, delay: f64) -> String {
        let (state, delay) = if shown {
            (&self.visible, delay)
        } else {
            (&self.hidden, 0.0)
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition-property: opacity, transform; transition-duration: {duration}s; transition-timing-function: {timing}; transition-delay: {delay}s;",
            opacity = state.opacity,
            transform = state.transform(),
            timing = self.transition.timing_function(),
        )
    }
}

impl Animation {

    pub fn spec(&self, position: Position, distance: f64) -> AnimationSpec {
        let (displacement, hidden_scale, transition) = match self {
            Animation::Smooth => (distance, None, Transition::spring(25.0, 300.0)),
            Animation::Pop => (distance, Some(0.9), Transition::spring(15.0, 400.0)),
            Animation::Fade => (0.0, None, Transition::Tween { ease: "ease-in-out" }),
            Animation::Scale => (0.0, Some(0.5), Transition::spring(20.0, 350.0)),
            Animation::Elastic => (distance * 1.5, Some(0.8), Transition::Spring { damping: 8.0, stiffness: 300.0, mass: 0.8 }),
            Animation::Shift => (distance, None, Transition::spring(20.0, 300.0)),
        };

        let hidden_offset = Offset::px(position.approach_sign() * displacement);

        let (hidden_x, hidden_y, visible_x, visible_y) = match position.axis() {
            Axis::Vertical => (Offset::CENTERED, hidden_offset, Offset::CENTERED, Offset::px(0.0)),
            Axis::Horizontal => (hidden_offset, Offset::CENTERED, Offset::px(0.0), Offset::CENTERED),
        };

        AnimationSpec {
            hidden: MotionState {
                opacity: 0.0,
                x: hidden_x,
                y: hidden_y,
                scale: hidden_scale,
            },
            visible: MotionState {
                opacity: 1.0,
                x: visible_x,
                y: visible_y,
                scale: hidden_scale.map(|_| 1.0),
            },
            transition,
        }
    }
}
