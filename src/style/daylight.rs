use crate::{style::MapStyle, MapError, Result};
use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Inclusive range of local hours mapped to a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaylightSlot {
    pub start_hour: u32,
    pub end_hour: u32,
    pub style: MapStyle,
}

impl DaylightSlot {
    pub fn new(start_hour: u32, end_hour: u32, style: MapStyle) -> Self {
        Self {
            start_hour,
            end_hour,
            style,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Picks a map style from the hour of day.
///
/// Slots are checked in order; hours no slot covers get `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaylightSchedule {
    pub slots: Vec<DaylightSlot>,
    pub fallback: MapStyle,
}

impl Default for DaylightSchedule {
    fn default() -> Self {
        Self {
            slots: vec![
                DaylightSlot::new(8, 11, MapStyle::Default),
                DaylightSlot::new(12, 18, MapStyle::Retro),
                DaylightSlot::new(19, 21, MapStyle::Aubergine),
                DaylightSlot::new(22, 23, MapStyle::Night),
            ],
            fallback: MapStyle::Dark,
        }
    }
}

impl DaylightSchedule {
    pub fn style_for_hour(&self, hour: u32) -> MapStyle {
        self.slots
            .iter()
            .find(|slot| slot.contains(hour))
            .map(|slot| slot.style)
            .unwrap_or(self.fallback)
    }

    /// Style for the current local hour
    pub fn current_style(&self) -> MapStyle {
        self.style_for_hour(chrono::Local::now().hour())
    }

    pub fn validate(&self) -> Result<()> {
        for slot in &self.slots {
            if slot.start_hour > 23 || slot.end_hour > 23 || slot.start_hour > slot.end_hour {
                return Err(MapError::Config(format!(
                    "invalid daylight slot {}..={} for {}",
                    slot.start_hour, slot.end_hour, slot.style
                )));
            }
        }
        Ok(())
    }
}

/// Style the default schedule picks for `hour`
pub fn style_for_hour(hour: u32) -> MapStyle {
    DaylightSchedule::default().style_for_hour(hour)
}
