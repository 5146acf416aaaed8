use flick_swipe_core::{
    CardId, CardMotionState, GestureEvent, GestureSample, Inputs, Phase, Profile, SwipeCard,
    SwipeConfig, SwipeDirection, SwipeEvent,
};

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 600;

fn profile(name: &str) -> Profile {
    Profile {
        id: name.into(),
        name: name.to_string(),
        age: 25,
        avatar: format!("https://example.com/{name}.jpg"),
        bio: None,
        distance: Some(3),
    }
}

fn top_card(name: &str) -> SwipeCard {
    SwipeCard::new(CardId(0), profile(name), true, SwipeConfig::default())
}

fn sample(tx: f32, ty: f32, vx: f32) -> GestureSample {
    GestureSample {
        translation_x: tx,
        translation_y: ty,
        velocity_x: vx,
    }
}

/// Feed a gesture script on one tick, then run the card until it comes
/// back to rest, collecting every event along the way.
fn run_script(card: &mut SwipeCard, gestures: Vec<GestureEvent>) -> Vec<SwipeEvent> {
    let mut events = card.update(DT, Inputs { gestures }).events.clone();
    for _ in 0..MAX_FRAMES {
        events.extend(card.update(DT, Inputs::default()).events.iter().cloned());
        if card.phase() == Phase::Resting && !card.motion().is_animating {
            break;
        }
    }
    assert_eq!(card.phase(), Phase::Resting, "card did not settle");
    events
}

fn drag(tx: f32, ty: f32, vx: f32) -> Vec<GestureEvent> {
    vec![
        GestureEvent::Start,
        GestureEvent::Update(sample(tx * 0.5, ty * 0.5, vx)),
        GestureEvent::Update(sample(tx, ty, vx)),
        GestureEvent::End(sample(tx, ty, vx)),
    ]
}

fn completions(events: &[SwipeEvent]) -> Vec<SwipeDirection> {
    events
        .iter()
        .filter_map(|e| match e {
            SwipeEvent::Completed(a) => Some(a.direction),
            _ => None,
        })
        .collect()
}

/// it should commit right when travel beats the distance threshold
#[test]
fn commit_on_distance() {
    let mut card = top_card("temie");
    let events = run_script(&mut card, drag(150.0, 10.0, 200.0));
    assert_eq!(completions(&events), vec![SwipeDirection::Right]);
}

/// it should commit on a fling even when short of the distance threshold
#[test]
fn commit_on_velocity() {
    let mut card = top_card("temie");
    let events = run_script(&mut card, drag(50.0, 5.0, 1000.0));
    assert_eq!(completions(&events), vec![SwipeDirection::Right]);
}

/// it should reset a vertical-dominant drag and emit no completion
#[test]
fn reset_on_vertical_drag() {
    let mut card = top_card("temie");
    let events = run_script(&mut card, drag(150.0, 200.0, 0.0));
    assert!(completions(&events).is_empty());
    assert!(events.contains(&SwipeEvent::Cancelled));
    assert_eq!(*card.motion(), CardMotionState::IDENTITY);
}

/// it should reset a short slow drag and return exactly to identity
#[test]
fn reset_on_nudge() {
    let mut card = top_card("temie");
    let events = run_script(&mut card, drag(40.0, 5.0, 100.0));
    assert!(completions(&events).is_empty());
    assert_eq!(*card.motion(), CardMotionState::IDENTITY);
}

/// it should commit left for leftward travel
#[test]
fn commit_left() {
    let mut card = top_card("temie");
    let events = run_script(&mut card, drag(-150.0, -10.0, -200.0));
    assert_eq!(completions(&events), vec![SwipeDirection::Left]);
}

/// it should emit exactly one completion per committing drag across a sequence
#[test]
fn exactly_once_emission() {
    let mut card = top_card("temie");
    let mut total = Vec::new();
    total.extend(run_script(&mut card, drag(150.0, 10.0, 200.0)));
    card.assign(profile("cuppy"));
    total.extend(run_script(&mut card, drag(40.0, 5.0, 100.0)));
    total.extend(run_script(&mut card, drag(-130.0, 0.0, -50.0)));
    card.assign(profile("tolani"));
    total.extend(run_script(&mut card, drag(150.0, 200.0, 0.0)));
    assert_eq!(
        completions(&total),
        vec![SwipeDirection::Right, SwipeDirection::Left]
    );
}

/// it should be bit-for-bit back at identity after a commit completes
#[test]
fn identity_after_commit() {
    let mut card = top_card("temie");
    run_script(&mut card, drag(200.0, 0.0, 900.0));
    assert_eq!(*card.motion(), CardMotionState::IDENTITY);
    // Safe to hand to the next profile.
    card.assign(profile("cuppy"));
    assert_eq!(card.profile().name, "cuppy");
}

/// it should carry the swiped profile in the completion payload
#[test]
fn completion_carries_profile() {
    let mut card = top_card("temie");
    let gestures = drag(150.0, 10.0, 200.0);
    let mut action = None;
    card.update(DT, Inputs { gestures });
    for _ in 0..MAX_FRAMES {
        if let Some(a) = card.update(DT, Inputs::default()).completed() {
            action = Some(a.clone());
            break;
        }
    }
    let action = action.expect("no completion");
    assert_eq!(action.direction, SwipeDirection::Right);
    assert_eq!(action.profile.name, "temie");
}

/// it should drop a drag start while the exit animation is running
#[test]
fn drag_ignored_while_committing() {
    let mut card = top_card("temie");
    card.update(DT, Inputs { gestures: drag(150.0, 10.0, 200.0) });
    // A few frames into the exit.
    card.update(DT, Inputs::default());
    let before = *card.motion();
    assert!(before.is_animating);

    let out = card.update(0.0, Inputs::one(GestureEvent::Start));
    assert!(out.events.contains(&SwipeEvent::DragIgnored));
    assert!(!out.events.contains(&SwipeEvent::DragStarted));
    assert_eq!(*card.motion(), before);
    assert!(matches!(card.phase(), Phase::Committing(_)));
}

/// it should ignore a drag start during the reset spring rather than queue it
#[test]
fn drag_ignored_while_resetting() {
    let mut card = top_card("temie");
    card.update(DT, Inputs { gestures: drag(40.0, 5.0, 100.0) });
    assert_eq!(card.phase(), Phase::Resetting);

    let out = card.update(0.0, Inputs::one(GestureEvent::Start));
    assert!(out.events.contains(&SwipeEvent::DragIgnored));
    assert_eq!(card.phase(), Phase::Resetting);
}

/// it should keep a non-top card in Resting no matter what arrives
#[test]
fn non_top_card_is_inert() {
    let mut card = SwipeCard::new(CardId(1), profile("next"), false, SwipeConfig::default());
    let events = run_script(&mut card, drag(300.0, 0.0, 2000.0));
    assert!(events.is_empty());
    assert_eq!(card.phase(), Phase::Resting);
    assert_eq!(*card.motion(), CardMotionState::IDENTITY);
}

/// it should treat a gesture cancel exactly like a non-committing end
#[test]
fn cancel_resets() {
    let mut card = top_card("temie");
    let events = run_script(
        &mut card,
        vec![
            GestureEvent::Start,
            GestureEvent::Update(sample(180.0, 0.0, 500.0)),
            GestureEvent::Cancel,
        ],
    );
    assert!(completions(&events).is_empty());
    assert!(events.contains(&SwipeEvent::Cancelled));
    assert_eq!(*card.motion(), CardMotionState::IDENTITY);
}

/// it should track drag updates directly and ease scale toward pressed
#[test]
fn drag_tracks_translation() {
    let mut card = top_card("temie");
    card.update(
        DT,
        Inputs {
            gestures: vec![
                GestureEvent::Start,
                GestureEvent::Update(sample(60.0, 12.0, 0.0)),
            ],
        },
    );
    assert_eq!(card.motion().offset_x, 60.0);
    assert_eq!(card.motion().offset_y, 12.0);
    assert!(!card.motion().is_animating);
    // Pressed scale eases down over subsequent frames.
    for _ in 0..30 {
        card.update(DT, Inputs::default());
    }
    let scale = card.motion().scale;
    assert!(scale < 1.0, "scale did not ease: {scale}");
    assert!(scale >= card.config().pressed_scale - 0.02);
}

/// it should honor commit() as a direct transition without any gesture
#[test]
fn direct_commit_from_button() {
    let mut card = top_card("temie");
    card.commit(SwipeDirection::Left);
    let mut actions = Vec::new();
    for _ in 0..MAX_FRAMES {
        if let Some(a) = card.update(DT, Inputs::default()).completed() {
            actions.push(a.clone());
            break;
        }
    }
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].direction, SwipeDirection::Left);
}

/// it should run scripted fixtures to the expected outcomes
#[test]
fn fixture_scripts() {
    let cases = [
        ("commit-distance", Some(SwipeDirection::Right)),
        ("commit-velocity", Some(SwipeDirection::Right)),
        ("vertical-drag", None),
        ("short-nudge", None),
    ];
    for (name, expected) in cases {
        let gestures: Vec<GestureEvent> =
            flick_test_fixtures::gestures::load(name).expect("fixture should load");
        let mut card = top_card("temie");
        let events = run_script(&mut card, gestures);
        let done = completions(&events);
        match expected {
            Some(dir) => assert_eq!(done, vec![dir], "fixture {name}"),
            None => assert!(done.is_empty(), "fixture {name}"),
        }
        assert_eq!(*card.motion(), CardMotionState::IDENTITY, "fixture {name}");
    }
}
