use dasher::assets::Textures;
use dasher::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use dasher::render;
use dasher::world::World;
use log::{error, info};
// No prelude glob here: macroquad's prelude re-exports quad_rand under the
// name `rand`, which would shadow the rand crate out of `thread_rng`.
use macroquad::prelude::{get_frame_time, is_key_pressed, next_frame, Conf, KeyCode};

fn window_conf() -> Conf {
    Conf {
        window_title: "Dapper Dasher!".to_owned(),
        window_width: VIEWPORT_WIDTH,
        window_height: VIEWPORT_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Asset load failure is fatal; log it and bail before the loop starts.
    let textures = match Textures::load().await {
        Ok(textures) => textures,
        Err(e) => {
            error!("startup failed: {}", e);
            return;
        }
    };

    let mut rng = rand::thread_rng();
    let mut world = World::new(&textures.layout(), &mut rng);
    info!("textures loaded, starting round");

    loop {
        let dt = get_frame_time();
        let jump_pressed = is_key_pressed(KeyCode::Space);

        world.update(dt, jump_pressed);
        render::draw(&world, &textures);

        next_frame().await;
    }
}
