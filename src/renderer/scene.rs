//! Build the frame's draw list from simulation state

use glam::Vec2;

use super::draw::{DrawCmd, colors};
use crate::Lane;
use crate::hud::DebugStats;
use crate::sim::{GameState, ZombieKind};

/// Half-width of a lane between its two guide lines
const LANE_HALF_WIDTH: f32 = 40.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;
const DEBUG_TEXT_SIZE: f32 = 12.0;
const DEBUG_LINE_HEIGHT: f32 = 15.0;

/// Draw calls for the current state, back to front
pub fn build_draw_list(state: &GameState, now_ms: f64) -> Vec<DrawCmd> {
    let vp = &state.viewport;
    let mut cmds = Vec::with_capacity(
        8 + state.zombies.len() * 3
            + state.bullets.len()
            + state.survivors.len()
            + state.followers.len(),
    );

    cmds.push(DrawCmd::Clear {
        color: colors::BACKGROUND,
    });

    for lane in Lane::ALL {
        let x = vp.lane_x(lane);
        for edge in [x - LANE_HALF_WIDTH, x + LANE_HALF_WIDTH] {
            cmds.push(DrawCmd::Line {
                from: Vec2::new(edge, 0.0),
                to: Vec2::new(edge, vp.height),
                width: 2.0,
                color: colors::LANE_GUIDE,
            });
        }
    }

    for survivor in &state.survivors {
        cmds.push(DrawCmd::ellipse(
            survivor.pos,
            survivor.size,
            colors::SURVIVOR,
        ));
    }

    for zombie in &state.zombies {
        match zombie.kind {
            ZombieKind::Regular => {
                cmds.push(DrawCmd::rect(zombie.pos, zombie.size, colors::ZOMBIE));
            }
            ZombieKind::Boss => {
                cmds.push(DrawCmd::rect(zombie.pos, zombie.size, colors::BOSS));
                let bar_center =
                    zombie.pos - Vec2::new(0.0, zombie.size.y * 0.5 + HEALTH_BAR_HEIGHT * 2.0);
                let full = Vec2::new(zombie.size.x, HEALTH_BAR_HEIGHT);
                cmds.push(DrawCmd::rect(bar_center, full, colors::HEALTH_BACK));

                let fraction = zombie.health as f32 / zombie.kind.max_health() as f32;
                let fill = Vec2::new(full.x * fraction, HEALTH_BAR_HEIGHT);
                // Left-aligned fill
                let fill_center = bar_center - Vec2::new((full.x - fill.x) * 0.5, 0.0);
                cmds.push(DrawCmd::rect(fill_center, fill, colors::HEALTH_FILL));
            }
        }
    }

    for bullet in &state.bullets {
        cmds.push(DrawCmd::rect(bullet.pos, bullet.size, colors::BULLET));
    }

    for follower in &state.followers {
        cmds.push(DrawCmd::rect(follower.pos, follower.size, colors::FOLLOWER));
    }

    cmds.push(DrawCmd::rect(
        state.player_pos(),
        state.player.size,
        colors::PLAYER,
    ));

    if state.tuning.show_debug_overlay {
        let stats = DebugStats::from_state(state, now_ms);
        for (i, text) in stats.lines().into_iter().enumerate() {
            cmds.push(DrawCmd::Text {
                pos: Vec2::new(10.0, 10.0 + i as f32 * DEBUG_LINE_HEIGHT),
                text,
                size: DEBUG_TEXT_SIZE,
                color: colors::DEBUG_TEXT,
            });
        }
    }

    cmds
}
