//! The shared sine easing curve and the gain envelope built on it.

/*
Easing and Gain Swells
======================

One curve shapes both tempo and loudness:

    easing(p) = clamp(sin(p · π), 0, 1)        p in 0..1

    1.0 ┤        ╭───╮
        │     ╭──╯   ╰──╮
        │   ╭─╯         ╰─╮
        │  ╱               ╲
    0.0 ┼─╯─────────────────╲──→ p
        0                    1

It starts at 0, peaks at 1 half-way and falls back to 0.

Vocabulary
----------

  window      A run of consecutive stations where an instrument stays
              assigned. Its length in ms is the sum of those stations' legs.

  step        Time between two events of one instrument inside a window.

  phase       `beats_per_phase` beats. The gain envelope repeats once per
              phase.


Tempo ramp (position in the window)
-----------------------------------

    step = easing(elapsed / window) · (slow − fast) + fast

where `fast = min(instrument beat, global beat)` and `slow = max(...)`. At
the edges of a window the instrument plays at its fastest; in the middle it
stretches out to the slower of the two intervals.


Gain swell (position in the phase)
----------------------------------

    p    = (beat mod beats_per_phase) / beats_per_phase
    gain = easing(p) · (gain_max − gain_min) + gain_min

This depends only on the beat number, not on the window, so an instrument
swells on the same beat grid no matter where its windows start. With
beats_per_phase = 4 the multipliers cycle 0, 0.707, 1, 0.707.
*/

use std::f64::consts::PI;

/// The shared easing curve.
///
/// # Example
/// ```
/// use subway_sequencer::sequencing::easing::easing;
/// assert_eq!(easing(0.0), 0.0);
/// assert!((easing(0.5) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn easing(progress: f64) -> f64 {
    (progress * PI).sin().clamp(0.0, 1.0)
}

/// Linear blend from `low` (at multiplier 0) to `high` (at multiplier 1)
#[inline]
pub fn blend(multiplier: f64, low: f64, high: f64) -> f64 {
    multiplier * (high - low) + low
}

/// Step length at `elapsed_ms` into a window of `window_ms`
#[inline]
pub fn step_ms(elapsed_ms: f64, window_ms: f64, fast_ms: f64, slow_ms: f64) -> f64 {
    blend(easing(elapsed_ms / window_ms), fast_ms, slow_ms)
}

/// Gain for `beat` on a periodic swell of `beats_per_phase` beats
#[inline]
pub fn phase_gain(beat: u64, beats_per_phase: u32, gain_min: f64, gain_max: f64) -> f64 {
    let period = u64::from(beats_per_phase);
    let progress = (beat % period) as f64 / period as f64;
    // blend can land one ulp above the top at the peak
    blend(easing(progress), gain_min, gain_max).min(gain_max)
}
