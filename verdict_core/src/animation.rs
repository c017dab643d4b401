//! # Animation Timeline
//!
//! Every delay and transition used by the panel, expressed as pure functions
//! of elapsed time. Front-ends sample these on each frame tick; nothing here
//! owns a clock.
//!
//! | Transition            | Start                    | Length |
//! |-----------------------|--------------------------|--------|
//! | Empty-input shake     | on submit                | 400 ms |
//! | Old panel exit        | on submit                | 300 ms |
//! | Post-response settle  | on response              | 600 ms |
//! | Confidence bar fill   | 100 ms after render      | 800 ms |
//! | Reason `i` fade-in    | 100 + 150·i ms after render | 300 ms |

use std::time::Duration;

use crate::verdict::VerdictView;

pub const SHAKE_DURATION: Duration = Duration::from_millis(400);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);
pub const SETTLE_DELAY: Duration = Duration::from_millis(600);
pub const BAR_FILL_DELAY: Duration = Duration::from_millis(100);
pub const BAR_FILL_DURATION: Duration = Duration::from_millis(800);
pub const REASON_BASE_DELAY: Duration = Duration::from_millis(100);
pub const REASON_STAGGER: Duration = Duration::from_millis(150);
pub const REASON_FADE: Duration = Duration::from_millis(300);

/// Horizontal travel of the shake keyframes, in pixels
pub const SHAKE_AMPLITUDE: f32 = 5.0;
/// How far the old panel drops while fading out
pub const EXIT_DROP: f32 = 10.0;
/// Where a reason starts before sliding in
pub const REASON_SLIDE: f32 = -10.0;

/// Appearance of one element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0.0 (invisible) to 1.0
    pub opacity: f32,
    /// Translation in pixels along the animated axis
    pub offset: f32,
}

impl Frame {
    pub const HIDDEN: Frame = Frame { opacity: 0.0, offset: 0.0 };
    pub const SHOWN: Frame = Frame { opacity: 1.0, offset: 0.0 };
}

/// Fraction of `duration` covered by `elapsed`, clamped to 0..=1
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Smooth ease-in-out used for fades
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Decelerating curve used for the confidence bar
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Horizontal offset of the input box during the attention shake.
///
/// Keyframes at 0/25/50/75/100% are 0, -5, +5, -5, 0 px.
pub fn shake_offset(elapsed: Duration) -> f32 {
    const KEYFRAMES: [f32; 5] = [0.0, -SHAKE_AMPLITUDE, SHAKE_AMPLITUDE, -SHAKE_AMPLITUDE, 0.0];

    if elapsed >= SHAKE_DURATION {
        return 0.0;
    }

    let t = progress(elapsed, SHAKE_DURATION) * 4.0;
    let index = (t.floor() as usize).min(3);
    let local = t - index as f32;
    KEYFRAMES[index] + (KEYFRAMES[index + 1] - KEYFRAMES[index]) * ease(local)
}

/// The previous panel fading out and dropping before a new request
pub fn exit_frame(elapsed: Duration) -> Frame {
    let t = ease(progress(elapsed, EXIT_TRANSITION));
    Frame {
        opacity: 1.0 - t,
        offset: EXIT_DROP * t,
    }
}

/// Bar width (0.0-1.0) at `elapsed` since the panel was shown.
///
/// Holds at zero for [`BAR_FILL_DELAY`] so the fill is always animated.
pub fn bar_fill(target: f32, elapsed: Duration) -> f32 {
    let target = target.clamp(0.0, 1.0);
    match elapsed.checked_sub(BAR_FILL_DELAY) {
        None => 0.0,
        Some(running) => target * ease_out(progress(running, BAR_FILL_DURATION)),
    }
}

/// Delay before reason `index` starts to appear
pub fn reason_delay(index: usize) -> Duration {
    REASON_BASE_DELAY + REASON_STAGGER * index as u32
}

/// Reason `index` fading in and sliding from the left
pub fn reason_frame(index: usize, elapsed: Duration) -> Frame {
    match elapsed.checked_sub(reason_delay(index)) {
        None => Frame {
            opacity: 0.0,
            offset: REASON_SLIDE,
        },
        Some(running) => {
            let t = ease(progress(running, REASON_FADE));
            Frame {
                opacity: t,
                offset: REASON_SLIDE * (1.0 - t),
            }
        }
    }
}

/// Time after which every entrance animation of `view` has completed
pub fn entrance_length(view: &VerdictView) -> Duration {
    let bar = BAR_FILL_DELAY + BAR_FILL_DURATION;
    let reasons = view
        .reasons
        .len()
        .checked_sub(1)
        .map(|last| reason_delay(last) + REASON_FADE)
        .unwrap_or_default();
    bar.max(reasons)
}

pub fn entrance_finished(view: &VerdictView, elapsed: Duration) -> bool {
    elapsed >= entrance_length(view)
}
