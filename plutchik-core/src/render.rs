//! Face rendering contract.
//!
//! Drawing lives outside this crate. A renderer receives a finished
//! [`EmotionalState`] and a drawing target; nothing flows back into the
//! classifier.

use crate::state::EmotionalState;

pub trait FaceRenderer {
    /// Drawing target, e.g. a canvas context or pixel buffer.
    type Surface;

    fn draw(&self, surface: &mut Self::Surface, width: u32, height: u32, state: &EmotionalState);
}
