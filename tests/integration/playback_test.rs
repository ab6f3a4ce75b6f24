//! End-to-end playback tests against the library API.

use std::time::Duration;

use demotape::{script, LineKind, Player, Script, Timing};

use super::helpers::sample_script_toml;

#[test]
fn a_full_pass_commits_every_script_line_in_order() {
    let script = Script::from_toml_str(sample_script_toml()).unwrap();
    let mut player = Player::new(script.clone(), Timing::default());

    player.complete_pass();

    assert_eq!(player.state().completed.len(), script.len());
    for (committed, original) in player.state().completed.iter().zip(script.lines()) {
        assert_eq!(committed, original);
    }
}

#[test]
fn the_builtin_demo_plays_through() {
    let script = script::builtin();
    let mut player = Player::new(script.clone(), Timing::default());
    player.complete_pass();
    assert_eq!(player.state().completed.len(), script.len());
}

#[test]
fn consecutive_passes_commit_identical_transcripts() {
    let script = Script::from_toml_str(sample_script_toml()).unwrap();
    let mut player = Player::new(script, Timing::default());

    let mut transcripts = Vec::new();
    for _ in 0..3 {
        player.complete_pass();
        let contents: Vec<String> = player
            .state()
            .completed
            .iter()
            .map(|l| l.content.clone())
            .collect();
        transcripts.push(contents);

        // Fire the restart timer to enter the next pass
        let restart = player.armed().expect("restart timer armed");
        player.run_until(restart.due());
        assert!(player.state().completed.is_empty());
    }

    assert_eq!(transcripts[0], transcripts[1]);
    assert_eq!(transcripts[1], transcripts[2]);
}

#[test]
fn snapshots_are_stable_for_a_given_logical_time() {
    // The engine is a pure function of (script, timing, logical time):
    // driving two instances along different schedules reaches the same
    // state at the same instant.
    let script = Script::from_toml_str(sample_script_toml()).unwrap();
    let mut coarse = Player::new(script.clone(), Timing::default());
    let mut fine = Player::new(script, Timing::default());

    for t in (0..3000).step_by(13) {
        fine.run_until(Duration::from_millis(t));
    }
    coarse.run_until(Duration::from_millis(2990));

    assert_eq!(coarse.state(), fine.state());
}

#[test]
fn command_lines_lag_output_lines_of_equal_length() {
    let content = "0123456789";
    let command = Script::from_lines([(LineKind::Command, content, Some(0))]);
    let output = Script::from_lines([(LineKind::Output, content, Some(0))]);

    let mut slow = Player::new(command, Timing::default());
    let mut fast = Player::new(output, Timing::default());

    let halfway = Duration::from_millis(200);
    slow.run_until(halfway);
    fast.run_until(halfway);

    assert!(slow.state().revealed < fast.state().revealed);
}
