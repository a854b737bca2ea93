use aabb_physics::{
    BodyId, CollisionListener, PhysicsMaterial, PhysicsWorld, RigidBody, SimulableEntity, Vector2,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::cell::Cell;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::thread::sleep;
use std::time::Duration;

const FRAME_DURATION: Duration = Duration::from_millis(33);
const FRAMES: usize = 300;
const NUM_CRATES: usize = 5;
const CRATE_COLORS: [Color; 5] = [Color::Red, Color::Green, Color::Blue, Color::Yellow, Color::Magenta];

/// Counts how many crates have passed through the checkpoint
struct Checkpoint {
    entered: Rc<Cell<u32>>,
}

impl CollisionListener for Checkpoint {
    fn on_collision_enter(&mut self, _other: BodyId, _direction: Vector2) {
        self.entered.set(self.entered.get() + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;

    let (width, height) = size()?;
    let width = width.max(40) as f32;
    let height = height.max(20) as f32;

    let mut world = PhysicsWorld::new();
    world.setup(0.4);
    world.get_config_mut().time_step = 0.5;

    // Terminal rows grow downwards, like world y
    let floor_y = height - 2.0;
    let floor = world.add_entity(SimulableEntity::new(Vector2::new(width / 2.0, floor_y)).with_footprint(width, 2.0));
    world.register_body(floor, RigidBody::new_static().with_material(PhysicsMaterial::wall()))?;

    let entered = Rc::new(Cell::new(0));
    let checkpoint = world.add_entity(
        SimulableEntity::new(Vector2::new(width / 2.0, floor_y - 8.0))
            .with_footprint(width, 2.0)
            .with_listener(Checkpoint { entered: Rc::clone(&entered) }),
    );
    world.register_body(checkpoint, RigidBody::new_static().with_trigger(true))?;

    let mut crates = Vec::new();
    for i in 0..NUM_CRATES {
        let x = (i as f32 + 1.0) * width / (NUM_CRATES as f32 + 1.0);
        let y = 2.0 + i as f32 * 2.0;
        let entity = world.add_entity(SimulableEntity::new(Vector2::new(x, y)).with_footprint(2.0, 2.0).with_tag("crate"));
        let body = RigidBody::new_dynamic(1.0)?
            .with_material(PhysicsMaterial::rubber())
            .with_velocity(Vector2::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0));
        world.register_body(entity, body)?;
        crates.push(entity);
    }

    for _ in 0..FRAMES {
        world.step();

        stdout.queue(Clear(ClearType::All))?;
        for x in 0..width as u16 {
            stdout
                .queue(MoveTo(x, (floor_y - 1.0) as u16))?
                .queue(Print('='))?
                .queue(MoveTo(x, (floor_y - 9.0) as u16))?
                .queue(Print('.'))?;
        }

        for (i, id) in crates.iter().enumerate() {
            let entity = world.get_entity(*id)?;
            let position = entity.get_position();
            if position.x < 0.0 || position.y < 0.0 || position.x >= width || position.y >= height {
                continue;
            }

            stdout
                .queue(MoveTo(position.x.round() as u16, position.y.round() as u16))?
                .queue(SetForegroundColor(CRATE_COLORS[i % CRATE_COLORS.len()]))?
                .queue(Print('#'))?
                .queue(ResetColor)?;
        }

        stdout
            .queue(MoveTo(0, 0))?
            .queue(Print(format!(
                "t={:.1}  checkpoint entries: {}",
                world.get_time(),
                entered.get()
            )))?;
        stdout.flush()?;

        sleep(FRAME_DURATION);
    }

    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, height as u16))?;
    Ok(())
}
