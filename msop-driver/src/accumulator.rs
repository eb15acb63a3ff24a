use crate::constants::HALF_TURN;
use msop_data::{PointSample, ANGLE_KEY_COUNT};
use std::collections::HashSet;

/// Emitted when the angle sequence jumps back by more than half a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBoundary {
    /// Distinct angle keys touched since the previous boundary.
    pub point_count: usize,
}

/// Latest sample seen at each angle key.
pub struct PointStore {
    slots: Vec<Option<PointSample>>,
    len: usize,
}

impl PointStore {
    pub fn new() -> PointStore {
        PointStore {
            slots: vec![None; ANGLE_KEY_COUNT],
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, sample: PointSample) {
        let slot = &mut self.slots[usize::from(sample.angle_key)];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(sample);
    }

    pub fn get(&self, angle_key: u16) -> Option<&PointSample> {
        self.slots.get(usize::from(angle_key))?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates stored samples in ascending angle order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &PointSample)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(key, slot)| slot.as_ref().map(|sample| (key as u16, sample)))
    }
}

impl Default for PointStore {
    fn default() -> Self {
        PointStore::new()
    }
}

/// Folds decoded samples into the point store and detects rotation boundaries.
///
/// The protocol carries no frame marker. A new rotation is assumed whenever an
/// angle is more than 180 degrees behind the previous one, so the field of view
/// must include the point where the sensor's angle wraps or no boundary is ever
/// reported.
#[derive(Default)]
pub struct ScanAccumulator {
    store: PointStore,
    working_set: HashSet<u16>,
    previous_angle: Option<u16>,
}

impl ScanAccumulator {
    pub fn new() -> ScanAccumulator {
        ScanAccumulator::default()
    }

    pub fn push(&mut self, sample: PointSample) -> Option<FrameBoundary> {
        self.store.insert(sample);
        self.working_set.insert(sample.angle_key);

        let angle = u32::from(sample.angle_key);
        let boundary = match self.previous_angle {
            Some(previous) if angle + HALF_TURN < u32::from(previous) => {
                let boundary = FrameBoundary {
                    point_count: self.working_set.len(),
                };
                self.working_set.clear();
                Some(boundary)
            }
            _ => None,
        };
        self.previous_angle = Some(sample.angle_key);
        boundary
    }

    pub fn points(&self) -> &PointStore {
        &self.store
    }

    pub fn working_set_len(&self) -> usize {
        self.working_set.len()
    }

    pub fn previous_angle(&self) -> Option<u16> {
        self.previous_angle
    }
}
