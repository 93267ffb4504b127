//! The host page must carry every element the wasm host writes to

use plat_duel::sim::Variant;

const PAGE: &str = include_str!("../index.html");

fn has_id(id: &str) -> bool {
    PAGE.contains(&format!("id=\"{}\"", id))
}

#[test]
fn page_has_canvas_and_win_overlay() {
    for id in ["canvas", "win-overlay", "win-text"] {
        assert!(has_id(id), "missing #{}", id);
    }
}

#[test]
fn page_has_hud_fields_for_every_player() {
    let players = Variant::ALL.iter().map(|v| v.player_count()).max().unwrap_or(0);
    for n in 1..=players {
        for field in ["name", "falls", "health"] {
            let id = format!("hud-p{}-{}", n, field);
            assert!(has_id(&id), "missing #{}", id);
        }
    }
}
