//! Board audio topology: jack widgets, routes to codec pins, and the pin
//! switches exposed as mixer controls.
//!
//! Pure data. The audio management layer walks it to decide which paths
//! are powered; nothing here touches hardware.
//!
//! Routes are a set. The board table lists each connection once, and
//! [`Topology::validate`] reports any table that does not.

use heapless::{String, Vec};

/// Longest mixer control name produced by [`PinSwitch::control_name`].
pub const CONTROL_NAME_LEN: usize = 44;

/// Most routes a topology may carry.
pub const MAX_ROUTES: usize = 16;

/// A board-level audio endpoint. Every endpoint on this board is a
/// line-level jack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Widget {
    /// Endpoint name, referenced by routes and switches.
    pub name: &'static str,
}

impl Widget {
    /// Line-level jack called `name`.
    pub const fn line(name: &'static str) -> Self {
        Self { name }
    }
}

/// A connection from `source` to `sink`, optionally gated by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Route {
    /// Destination endpoint.
    pub sink: &'static str,
    /// Gating control, `None` for a fixed connection.
    pub control: Option<&'static str>,
    /// Origin endpoint.
    pub source: &'static str,
}

impl Route {
    /// Always-connected route from `source` to `sink`.
    pub const fn fixed(sink: &'static str, source: &'static str) -> Self {
        Self {
            sink,
            control: None,
            source,
        }
    }
}

/// User-visible on/off switch for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSwitch {
    /// Widget the switch controls.
    pub pin: &'static str,
}

impl PinSwitch {
    /// Mixer control name, `"<pin> Switch"`.
    pub fn control_name(&self) -> Result<String<CONTROL_NAME_LEN>, TopologyError> {
        let mut name = String::new();
        name.push_str(self.pin)
            .and_then(|()| name.push_str(" Switch"))
            .map_err(|_| TopologyError::NameTooLong(self.pin))?;
        Ok(name)
    }
}

/// Topology defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TopologyError {
    /// A route names something that is neither a widget nor a codec pin.
    UnknownEndpoint(&'static str),
    /// The same route appears more than once.
    DuplicateRoute(Route),
    /// A switch names something that is not a widget.
    UnknownSwitchPin(&'static str),
    /// A control name does not fit [`CONTROL_NAME_LEN`].
    NameTooLong(&'static str),
    /// More than [`MAX_ROUTES`] distinct routes.
    TooManyRoutes,
}

impl core::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownEndpoint(name) => write!(f, "route endpoint '{name}' does not exist"),
            Self::DuplicateRoute(r) => {
                write!(f, "duplicate route '{}' -> '{}'", r.source, r.sink)
            }
            Self::UnknownSwitchPin(name) => write!(f, "switch for unknown widget '{name}'"),
            Self::NameTooLong(name) => write!(f, "control name for '{name}' is too long"),
            Self::TooManyRoutes => write!(f, "more than {MAX_ROUTES} distinct routes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TopologyError {}

/// Widgets, routes and switches of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Board endpoints.
    pub widgets: &'static [Widget],
    /// Connections between board endpoints and codec pins.
    pub routes: &'static [Route],
    /// Switchable widgets.
    pub switches: &'static [PinSwitch],
}

impl Topology {
    /// `true` if `name` is a board widget.
    pub fn has_widget(&self, name: &str) -> bool {
        self.widgets.iter().any(|w| w.name == name)
    }

    /// Check every route and switch against the board widgets and the
    /// codec's pin names. Stops at the first defect.
    pub fn validate(&self, codec_pins: &[&str]) -> Result<(), TopologyError> {
        let known = |name: &str| self.has_widget(name) || codec_pins.contains(&name);

        for (i, route) in self.routes.iter().enumerate() {
            for endpoint in [route.sink, route.source] {
                if !known(endpoint) {
                    return Err(TopologyError::UnknownEndpoint(endpoint));
                }
            }
            if self.routes.iter().take(i).any(|earlier| earlier == route) {
                return Err(TopologyError::DuplicateRoute(*route));
            }
        }

        for switch in self.switches {
            if !self.has_widget(switch.pin) {
                return Err(TopologyError::UnknownSwitchPin(switch.pin));
            }
            switch.control_name()?;
        }
        Ok(())
    }

    /// Routes with repeats removed, first occurrence kept.
    pub fn unique_routes(&self) -> Result<Vec<Route, MAX_ROUTES>, TopologyError> {
        let mut out: Vec<Route, MAX_ROUTES> = Vec::new();
        for route in self.routes {
            if out.contains(route) {
                continue;
            }
            out.push(*route)
                .map_err(|_| TopologyError::TooManyRoutes)?;
        }
        Ok(out)
    }
}

/// Line-out jack.
pub const LINE_OUT: &str = "Line out";

/// Line-in jack.
pub const LINE_IN: &str = "Line in";

const CSYS_WIDGETS: [Widget; 2] = [Widget::line(LINE_OUT), Widget::line(LINE_IN)];

const CSYS_ROUTES: [Route; 2] = [
    Route::fixed(LINE_OUT, "LOUT1"),
    Route::fixed("LINPUT1", LINE_IN),
];

const CSYS_SWITCHES: [PinSwitch; 2] = [PinSwitch { pin: LINE_OUT }, PinSwitch { pin: LINE_IN }];

/// The console's line-in / line-out topology on the ES8328.
pub const CSYS_TOPOLOGY: Topology = Topology {
    widgets: &CSYS_WIDGETS,
    routes: &CSYS_ROUTES,
    switches: &CSYS_SWITCHES,
};
