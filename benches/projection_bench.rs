use criterion::{black_box, criterion_group, criterion_main, Criterion};

use navgeom::{
    geo_to_vect, vect_to_geo, FlatPlaneProjection, GeoPos2, GeoPos3, LambertConformalConic,
    PlaneProjection,
};

/// Grid of positions around `center`, `size` x `size`, 0.1° apart
fn make_grid(center: GeoPos2, size: usize) -> Vec<GeoPos2> {
    let half = size as f64 * 0.05;
    let mut grid = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            grid.push(GeoPos2::new(
                center.lat - half + row as f64 * 0.1,
                center.lon - half + col as f64 * 0.1,
            ));
        }
    }
    grid
}

fn bench_geo_vect(c: &mut Criterion) {
    let pos = GeoPos3::new(49.5, 17.25, 1200.0);
    c.bench_function("geo_to_vect", |b| b.iter(|| geo_to_vect(black_box(pos))));

    let v = geo_to_vect(pos);
    c.bench_function("vect_to_geo", |b| b.iter(|| vect_to_geo(black_box(v))));
}

fn bench_forward(c: &mut Criterion) {
    let center = GeoPos2::new(50.0, 14.0);
    let grid = make_grid(center, 64);
    let projections: [(&str, Box<dyn PlaneProjection>); 4] = [
        ("orthographic", Box::new(FlatPlaneProjection::orthographic(center, 0.0))),
        ("gnomonic", Box::new(FlatPlaneProjection::gnomonic(center, 0.0))),
        ("stereographic", Box::new(FlatPlaneProjection::stereographic(center, 0.0))),
        (
            "lambert",
            Box::new(LambertConformalConic::new(center.lat, center.lon, 45.0, 55.0).unwrap()),
        ),
    ];

    for (name, proj) in &projections {
        c.bench_function(&format!("{name}_forward_64x64"), |b| {
            b.iter(|| proj.geo_to_plane_batch(black_box(&grid)))
        });
    }
}

fn bench_inverse(c: &mut Criterion) {
    let center = GeoPos2::new(50.0, 14.0);
    let grid = make_grid(center, 64);

    for (name, proj) in [
        ("gnomonic", FlatPlaneProjection::gnomonic(center, 30.0)),
        ("stereographic", FlatPlaneProjection::stereographic(center, 30.0)),
    ] {
        let plane: Vec<_> = grid.iter().filter_map(|p| proj.geo_to_plane(*p)).collect();
        c.bench_function(&format!("{name}_inverse_64x64"), |b| {
            b.iter(|| {
                for p in &plane {
                    black_box(proj.plane_to_geo(black_box(*p)).unwrap());
                }
            })
        });
    }
}

criterion_group!(benches, bench_geo_vect, bench_forward, bench_inverse);
criterion_main!(benches);
