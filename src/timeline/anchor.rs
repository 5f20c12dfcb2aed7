//! Speed-anchor edits: change one boundary of a motion and re-time its neighbours
//! so the timeline stays gapless.
//!
//! Anchoring the start keeps `start_tick` fixed, moves `end_tick`, and shifts every
//! later motion by the change in period. Anchoring the end is the mirror image and
//! shifts every earlier motion instead. Shifted motions keep their periods.

use crate::{
    foundation::core::Tick,
    foundation::error::MotionlineResult,
    timeline::motion::Motion,
    timeline::sequence::Timeline,
};

impl Timeline {
    /// Set the end tick of the motion starting at `start_tick` to `new_end_tick` and
    /// ripple the change through every following motion.
    ///
    /// Fails with `InvalidInterval` if the anchor would degenerate or a shifted follower
    /// would leave the tick range. On failure the timeline is unchanged.
    pub fn change_speed_anchor_start_point(
        &mut self,
        start_tick: Tick,
        new_end_tick: Tick,
    ) -> MotionlineResult<()> {
        let idx = self.index_by_start(start_tick)?;
        let mut anchor = self.motions[idx].clone();
        anchor.change_end_tick(new_end_tick)?;
        let delta = anchor.period() - self.motions[idx].period();

        let following = shifted(&self.motions[idx + 1..], delta)?;
        self.motions[idx] = anchor;
        self.motions[idx + 1..].clone_from_slice(&following);
        tracing::debug!(
            shape = self.name(),
            start_tick,
            delta,
            shifted = following.len(),
            "anchored start point"
        );
        Ok(())
    }

    /// Set the start tick of the motion ending at `end_tick` to `new_start_tick` and
    /// ripple the change through every preceding motion.
    ///
    /// Fails like [`change_speed_anchor_start_point`](Self::change_speed_anchor_start_point),
    /// leaving the timeline unchanged.
    pub fn change_speed_anchor_end_point(
        &mut self,
        end_tick: Tick,
        new_start_tick: Tick,
    ) -> MotionlineResult<()> {
        let idx = self.index_by_end(end_tick)?;
        let mut anchor = self.motions[idx].clone();
        anchor.change_start_tick(new_start_tick)?;
        let delta = anchor.period() - self.motions[idx].period();

        // A longer anchor starts earlier, so everything before it moves earlier too.
        let preceding = shifted(&self.motions[..idx], -delta)?;
        self.motions[..idx].clone_from_slice(&preceding);
        self.motions[idx] = anchor;
        tracing::debug!(
            shape = self.name(),
            end_tick,
            delta,
            shifted = idx,
            "anchored end point"
        );
        Ok(())
    }
}

/// Copies of `motions` moved by `by` ticks, or the first boundary that would overflow.
///
/// Periods lie in `1..=Tick::MAX`, so a difference of two periods and its negation
/// are always representable.
fn shifted(motions: &[Motion], by: Tick) -> MotionlineResult<Vec<Motion>> {
    motions
        .iter()
        .map(|m| {
            let mut m = m.clone();
            if by < 0 {
                m.push_backward(-by)?;
            } else {
                m.push_forward(by)?;
            }
            Ok(m)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/anchor.rs"]
mod tests;
