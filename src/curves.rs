//! Intensity response curves for the indicator output.
//!
//! Applied to the fade level just before it is written to the hardware; the
//! fade itself always runs linearly in [0, 255].

/// Response curve for the written intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeCurve {
    /// Write the fade level unchanged.
    Linear,

    /// Gamma-corrected output so the fade looks linear to the eye.
    ///
    /// Requires the `perceptual-fade` feature and the `libm` dependency.
    #[cfg(feature = "perceptual-fade")]
    Perceptual,
}

impl FadeCurve {
    /// Map a fade level to the intensity actually written.
    ///
    /// Endpoints are preserved: 0 maps to 0 and 255 to 255 for every curve.
    #[inline]
    pub fn apply(&self, level: u8) -> u8 {
        match self {
            FadeCurve::Linear => level,

            #[cfg(feature = "perceptual-fade")]
            FadeCurve::Perceptual => apply_perceptual(level),
        }
    }
}

/// Gamma correction with exponent 2.2, the usual LED/display value.
///
/// LEDs driven by linear PWM appear to jump to full brightness early in the
/// fade; pushing the level through x^2.2 spreads the visible change evenly
/// across the fade duration.
#[cfg(feature = "perceptual-fade")]
#[inline]
fn apply_perceptual(level: u8) -> u8 {
    const GAMMA: f32 = 2.2;

    let x = f32::from(level) / 255.0;
    let corrected = libm::powf(x, GAMMA) * 255.0;

    // powf(x in [0,1]) stays in [0,1], so this cast cannot truncate badly;
    // round so 255 maps back to exactly 255.
    (corrected + 0.5) as u8
}
