use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flick_swipe_core::{
    CardId, GestureEvent, GestureSample, Inputs, Profile, SwipeCard, SwipeConfig,
};

const DT: f32 = 1.0 / 60.0;

fn profile() -> Profile {
    Profile {
        id: "bench".into(),
        name: "Bench".into(),
        age: 25,
        avatar: "https://example.com/bench.jpg".into(),
        bio: None,
        distance: None,
    }
}

fn drag_commit_cycle(card: &mut SwipeCard) {
    let gestures = vec![
        GestureEvent::Start,
        GestureEvent::Update(GestureSample {
            translation_x: 80.0,
            translation_y: 6.0,
            velocity_x: 400.0,
        }),
        GestureEvent::End(GestureSample {
            translation_x: 160.0,
            translation_y: 12.0,
            velocity_x: 400.0,
        }),
    ];
    card.update(DT, Inputs { gestures });
    loop {
        let out = card.update(DT, Inputs::default());
        if out.completed().is_some() {
            break;
        }
    }
}

fn bench_swipe_step(c: &mut Criterion) {
    c.bench_function("drag_commit_cycle", |b| {
        let mut card = SwipeCard::new(CardId(0), profile(), true, SwipeConfig::default());
        b.iter(|| {
            drag_commit_cycle(&mut card);
            black_box(card.motion());
        });
    });
}

criterion_group!(benches, bench_swipe_step);
criterion_main!(benches);
