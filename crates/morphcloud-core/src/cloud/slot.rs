use morphcloud_common::{MorphError, Rgb};

use super::MorphableCloud;
use crate::color_state::ColorSlot;
use crate::morph::Morphable;

/// Load state of the cloud.
///
/// Control input that arrives before geometry is ready gets
/// [`MorphError::NotLoaded`] instead of driving a shader with no attributes.
#[derive(Debug, Default)]
pub enum CloudSlot {
    #[default]
    Empty,
    Loaded(Box<MorphableCloud>),
}

impl CloudSlot {
    pub fn load(&mut self, cloud: MorphableCloud) {
        *self = CloudSlot::Loaded(Box::new(cloud));
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CloudSlot::Loaded(_))
    }

    pub fn get(&self) -> Result<&MorphableCloud, MorphError> {
        match self {
            CloudSlot::Loaded(cloud) => Ok(cloud.as_ref()),
            CloudSlot::Empty => Err(MorphError::NotLoaded),
        }
    }

    pub fn get_mut(&mut self) -> Result<&mut MorphableCloud, MorphError> {
        match self {
            CloudSlot::Loaded(cloud) => Ok(cloud.as_mut()),
            CloudSlot::Empty => Err(MorphError::NotLoaded),
        }
    }

    pub fn advance_frame(&mut self, elapsed: f32) -> Result<(), MorphError> {
        self.get_mut()?.advance_frame(elapsed)
    }

    pub fn set_color(&mut self, slot: ColorSlot, color: Rgb) -> Result<(), MorphError> {
        self.get_mut()?.set_color(slot, color);
        Ok(())
    }
}

impl From<MorphableCloud> for CloudSlot {
    fn from(cloud: MorphableCloud) -> Self {
        CloudSlot::Loaded(Box::new(cloud))
    }
}

impl Morphable for CloudSlot {
    fn shape_count(&self) -> usize {
        self.get().map(Morphable::shape_count).unwrap_or(0)
    }

    fn current_index(&self) -> Option<usize> {
        self.get().ok().and_then(Morphable::current_index)
    }

    fn begin_morph(&mut self, index: usize) -> Result<(), MorphError> {
        self.get_mut()?.begin_morph(index)
    }
}
