use tessera_engine::coords::{Point, Vector};
use tessera_engine::paint::{Brush, Color, DrawStyle, Pen};
use tessera_engine::scene::{Composite, Ellipse, Line, ObjectId, Polygon, Scene};
use tessera_engine::transform::Space;
use tessera_engine::Result;

/// Two triangles orbiting inside a spinning group, over a pair of axes.
pub struct Demo {
    pub scene: Scene,
    group: ObjectId,
    left: ObjectId,
    right: ObjectId,
}

impl Demo {
    pub fn build() -> Result<Self> {
        let mut scene = Scene::new();

        let triangle = || {
            Polygon::with_vertices([
                Point::new(0.0, 0.0),
                Point::new(8.0, 8.0),
                Point::new(16.0, 0.0),
            ])
        };
        let filled = |color| DrawStyle::default().with_brush(Brush::solid(color));

        let right = scene.insert_with_style(triangle(), filled(Color::rgb(255, 0, 0)));
        let left = scene.insert_with_style(triangle(), filled(Color::rgb(0, 255, 0)));
        let hub = scene.insert_with_style(
            Ellipse::new(Point::origin(), 3.0, 3.0),
            DrawStyle::default().with_brush(Brush::solid(Color::rgb(0, 0, 255))),
        );
        let group = scene.insert(Composite::new());
        scene.add_object(group, right)?;
        scene.add_object(group, left)?;
        scene.add_object(group, hub)?;
        scene.add_to_root(group)?;

        let axis = DrawStyle::default().with_pen(Pen::solid(3.0, Color::black()));
        let x_axis = Line::new(Point::new(-1000.0, 0.0), Point::new(1000.0, 0.0));
        let y_axis = Line::new(Point::new(0.0, -1000.0), Point::new(0.0, 1000.0));
        let ox = scene.insert_with_style(x_axis, axis);
        let oy = scene.insert_with_style(y_axis, axis);
        scene.add_to_root(ox)?;
        scene.add_to_root(oy)?;

        scene.translate(right, Vector::new(100.0, 0.0), Space::Local)?;
        scene.translate(left, Vector::new(-100.0, 0.0), Space::Local)?;

        log::info!("demo scene ready with {} objects", scene.len());
        Ok(Self {
            scene,
            group,
            left,
            right,
        })
    }

    /// One animation update: the group drifts right while spinning, and the
    /// triangles converge towards its center.
    pub fn update(&mut self) -> Result<()> {
        self.scene.translate(self.group, Vector::new(5.0, 0.0), Space::World)?;
        self.scene.rotate(self.group, 5.0, Space::Local)?;
        self.scene.translate(self.right, Vector::new(-5.0, 0.0), Space::Local)?;
        self.scene.translate(self.left, Vector::new(5.0, 0.0), Space::Local)?;
        Ok(())
    }

    /// World position of the group's origin.
    pub fn group_origin(&self) -> Result<Point> {
        self.scene.local_to_world(self.group, Point::origin())
    }
}
