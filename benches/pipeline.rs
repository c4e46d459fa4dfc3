//! Benchmarks for the sprite pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cauldron_sprites::render::write_png;
use cauldron_sprites::sprites::{catalog, floor, machines, player, potions};
use cauldron_sprites::types::Colour;
use cauldron_sprites::Canvas;

// -- Drawing benchmarks --

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    group.bench_function("floor_atlas", |b| {
        b.iter(|| floor::floor_atlas(black_box(floor::DEFAULT_SEED)))
    });

    group.bench_function("cauldron", |b| b.iter(machines::cauldron));

    group.bench_function("potion", |b| {
        b.iter(|| potions::potion(black_box(potions::potion_colour([0.8, 0.2, 0.2]))))
    });

    group.bench_function("player_spritesheet", |b| b.iter(player::player_spritesheet));

    group.bench_function("full_catalog", |b| {
        b.iter(|| {
            catalog(black_box(floor::DEFAULT_SEED))
                .iter()
                .map(|s| s.render())
                .count()
        })
    });

    group.finish();
}

// -- Conversion benchmarks --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    // 800x400 gradient stands in for a photo
    let mut source = Canvas::new(800, 400);
    for y in 0..400 {
        for x in 0..800 {
            source.point(
                x,
                y,
                Colour::rgb((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8),
            );
        }
    }

    group.bench_function("atlas_from_source", |b| {
        b.iter(|| floor::atlas_from_source(black_box(&source)).unwrap())
    });

    group.finish();
}

// -- Output benchmarks --

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let dir = tempfile::tempdir().unwrap();
    let sheet = player::player_spritesheet();

    group.bench_function("write_png_player", |b| {
        b.iter(|| write_png(black_box(&sheet), &dir.path().join("player.png"), 1).unwrap())
    });

    group.bench_function("write_png_player_x4", |b| {
        b.iter(|| write_png(black_box(&sheet), &dir.path().join("player4.png"), 4).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_drawing, bench_conversion, bench_output);
criterion_main!(benches);
