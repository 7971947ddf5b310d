//! # Footing Formulas
//!
//! Self-weight, overburden and resistance terms for an isolated spread
//! footing under a single post. Geometry in feet, unit weights in pcf,
//! forces in lb.

/// Weight of a block of material
///
/// # Formula
/// W = V × γ
#[inline]
pub fn block_weight(volume_ft3: f64, unit_weight_pcf: f64) -> f64 {
    volume_ft3 * unit_weight_pcf
}

/// Weight of soil standing on top of the footing
///
/// # Formula
/// W_ob = A × D × γ_soil
#[inline]
pub fn overburden_weight(area_ft2: f64, depth_ft: f64, soil_unit_weight_pcf: f64) -> f64 {
    area_ft2 * depth_ft * soil_unit_weight_pcf
}

/// Frictional sliding resistance reduced by a factor of safety
///
/// # Formula
/// R_slide = μ·V / SF
#[inline]
pub fn sliding_resistance(mu: f64, vertical_lb: f64, sf: f64) -> f64 {
    mu * vertical_lb / sf
}

/// Dead-weight uplift resistance reduced by a factor of safety
///
/// # Formula
/// R_uplift = (W_footing + W_ob + credit) / SF
#[inline]
pub fn uplift_resistance(w_footing: f64, w_overburden: f64, credit_lb: f64, sf: f64) -> f64 {
    (w_footing + w_overburden + credit_lb) / sf
}
