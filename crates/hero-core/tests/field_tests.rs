use glam::Vec2;
use hero_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.5)
}

fn two_particle_field() -> Field {
    Field::with_particles(
        vec![still(0.0, 0.0), still(100.0, 0.0)],
        Size::new(800.0, 600.0),
        FieldParams::default(),
    )
    .unwrap()
}

fn line_opacities(surface: &RecordingSurface, want_width: f32) -> Vec<f32> {
    surface
        .lines()
        .filter_map(|c| match c {
            DrawCommand::Line { width, color, .. } if *width == want_width => Some(color.alpha),
            _ => None,
        })
        .collect()
}

#[test]
fn particle_count_follows_width() {
    let params = FieldParams::default();
    assert_eq!(particle_count(500.0, &params), 50);
    assert_eq!(particle_count(505.0, &params), 50);
    assert_eq!(particle_count(2000.0, &params), 80);
    assert_eq!(particle_count(800.0, &params), 80);
    assert_eq!(particle_count(5.0, &params), 1);
    assert_eq!(particle_count(0.0, &params), 1);
    assert_eq!(particle_count(-40.0, &params), 1);
    assert_eq!(particle_count(f32::NAN, &params), 1);
    assert_eq!(particle_count(f32::INFINITY, &params), 1);
}

#[test]
fn new_field_spawns_width_derived_population() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = Field::new(Size::new(500.0, 300.0), FieldParams::default(), &mut rng).unwrap();
    assert_eq!(field.particles().len(), 50);
    assert_eq!(field.pointer(), None);
    assert_eq!(field.size(), Size::new(500.0, 300.0));
}

#[test]
fn one_frame_without_pointer_links_the_close_pair() {
    let mut field = two_particle_field();
    let mut surface = RecordingSurface::new(field.size());
    let stats = field.step(&mut surface);

    assert_eq!(
        stats,
        FrameStats {
            particles: 2,
            pair_links: 1,
            pointer_links: 0
        }
    );
    assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));
    assert_eq!(surface.circles().count(), 2);
    assert_eq!(surface.lines().count(), 1);
    let pair = line_opacities(&surface, PAIR_LINE_WIDTH);
    assert_eq!(pair.len(), 1);
    assert!((pair[0] - (1.0 - 100.0 / 150.0) * 0.3).abs() < 1e-6);
}

#[test]
fn one_frame_with_pointer_adds_pointer_links() {
    let mut field = two_particle_field();
    field.set_pointer(0.0, 0.0);
    let mut surface = RecordingSurface::new(field.size());
    let stats = field.step(&mut surface);

    assert_eq!(stats.pair_links, 1);
    assert_eq!(stats.pointer_links, 2);
    let mut pointer = line_opacities(&surface, POINTER_LINE_WIDTH);
    pointer.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(pointer.len(), 2);
    assert!((pointer[0] - 0.5).abs() < 1e-6);
    assert!((pointer[1] - (1.0 - 100.0 / 225.0) * 0.5).abs() < 1e-6);
    assert!((pointer[1] - 0.278).abs() < 1e-3);
}

#[test]
fn circles_are_drawn_before_links_with_particle_style() {
    let mut field = two_particle_field();
    let mut surface = RecordingSurface::new(field.size());
    field.step(&mut surface);
    let first_line = surface
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap();
    let last_circle = surface
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Circle { .. }))
        .unwrap();
    assert!(last_circle < first_line);
    for c in surface.circles() {
        if let DrawCommand::Circle { radius, color, .. } = c {
            assert_eq!(*radius, 2.0);
            assert_eq!(color.alpha, 0.5);
            assert_eq!(color.rgb, PARTICLE_RGB);
        }
    }
}

#[test]
fn clearing_the_pointer_removes_pointer_links() {
    let mut field = two_particle_field();
    field.set_pointer(50.0, 0.0);
    let mut surface = RecordingSurface::new(field.size());
    assert_eq!(field.step(&mut surface).pointer_links, 2);
    field.clear_pointer();
    assert_eq!(field.step(&mut surface).pointer_links, 0);
    assert_eq!(surface.lines().count(), 1);
}

#[test]
fn resize_keeps_particles_in_place() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = Field::new(Size::new(1000.0, 800.0), FieldParams::default(), &mut rng).unwrap();
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    field.resize(200.0, 100.0);
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(field.particles().len(), 80);
    assert_eq!(field.size(), Size::new(200.0, 100.0));
}

#[test]
fn draw_repaints_without_moving() {
    let particles = vec![Particle::new(
        Vec2::new(10.0, 10.0),
        Vec2::new(0.2, 0.1),
        1.0,
        0.5,
    )];
    let mut field =
        Field::with_particles(particles, Size::new(100.0, 100.0), FieldParams::default()).unwrap();
    let mut surface = RecordingSurface::new(field.size());
    let stats = field.draw(&mut surface);
    assert_eq!(stats.particles, 1);
    assert_eq!(field.particles()[0].position, Vec2::new(10.0, 10.0));
    assert_eq!(surface.circles().count(), 1);

    field.step(&mut surface);
    assert!((field.particles()[0].position - Vec2::new(10.2, 10.1)).length() < 1e-5);
}

#[test]
fn all_particles_bounce_against_the_current_size() {
    let particles = vec![
        Particle::new(Vec2::new(199.9, 10.0), Vec2::new(0.2, 0.0), 1.0, 0.5),
        Particle::new(Vec2::new(199.9, 20.0), Vec2::new(0.2, 0.0), 1.0, 0.5),
    ];
    let mut field =
        Field::with_particles(particles, Size::new(400.0, 400.0), FieldParams::default()).unwrap();
    field.resize(200.0, 400.0);
    let mut surface = RecordingSurface::new(field.size());
    field.step(&mut surface);
    assert!(field.particles().iter().all(|p| p.velocity.x < 0.0));
}

#[test]
fn degenerate_surface_never_produces_nan() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = Field::new(Size::new(0.0, 0.0), FieldParams::default(), &mut rng).unwrap();
    assert_eq!(field.particles().len(), 1);
    let mut surface = RecordingSurface::new(field.size());
    for _ in 0..100 {
        field.step(&mut surface);
    }
    assert!(field
        .particles()
        .iter()
        .all(|p| p.position.is_finite() && p.velocity.is_finite()));
}

#[test]
fn empty_population_is_rejected() {
    let err = Field::with_particles(vec![], Size::new(10.0, 10.0), FieldParams::default())
        .unwrap_err();
    assert_eq!(err, FieldError::EmptyPopulation);
}

#[test]
fn invalid_params_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = FieldParams {
        link_distance: 0.0,
        ..FieldParams::default()
    };
    assert!(matches!(
        Field::new(Size::new(100.0, 100.0), params, &mut rng),
        Err(FieldError::InvalidParams(_))
    ));

    let params = FieldParams {
        opacity_range: [0.7, 0.2],
        ..FieldParams::default()
    };
    assert!(params.validate().is_err());

    let params = FieldParams {
        max_particles: 0,
        ..FieldParams::default()
    };
    assert!(matches!(params.validate(), Err(FieldError::InvalidParams(_))));
    assert!(FieldParams::default().validate().is_ok());
}

#[test]
fn rgba_formats_as_css() {
    let c = Rgba::new(PARTICLE_RGB, 0.25);
    assert_eq!(c.to_css(), "rgba(100, 200, 255, 0.25)");
    assert_eq!(Rgba::new([0, 0, 0], 2.0).to_css(), "rgba(0, 0, 0, 1)");
}

#[test]
fn size_reports_degenerate_axes() {
    assert!(Size::new(0.0, 10.0).is_degenerate());
    assert!(Size::new(10.0, -1.0).is_degenerate());
    assert!(Size::new(f32::NAN, 10.0).is_degenerate());
    assert!(!Size::new(1.0, 1.0).is_degenerate());
}
