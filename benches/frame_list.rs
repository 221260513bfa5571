use criterion::{criterion_group, criterion_main, Criterion};
use roast2d_frames::prelude::*;

fn build_animation(n: usize) -> Animation {
    let texture = Texture::new(Handle::detached(), UVec2::new(1024, 32));
    let mut anim = Animation::builder("bench").delay(0.1).build().unwrap();
    for i in 0..n {
        let rect = Rect::new(Vec2::new(i as f32 * 32.0, 0.0), Vec2::splat(32.0));
        anim.add_frame_with_texture(texture.clone(), rect);
    }
    anim
}

fn share_frames(anim: &Animation, n: usize) {
    for i in 0..n {
        let mut other = Animation::builder("shared")
            .frames(anim.frames().clone())
            .build()
            .unwrap();
        if i % 2 == 0 {
            other.add_frame(anim.frame(0).unwrap().clone());
        }
        debug_assert!(other.len() >= anim.len());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("add frame 32", |b| b.iter(|| build_animation(32)));
    c.bench_function("add frame 1000", |b| b.iter(|| build_animation(1000)));
    let anim = build_animation(32);
    c.bench_function("share frames 100", |b| b.iter(|| share_frames(&anim, 100)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
