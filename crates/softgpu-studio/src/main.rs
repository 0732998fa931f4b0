//! Phong-lit sphere rendered on the software device.
//!
//! Renders `--frames` frames, prints the average seconds per frame and
//! writes the last frame to a PNG.

mod camera;
mod config;
mod mesh;
mod output;
mod phong;
mod timer;

use clap::Parser as _;
use softgpu_engine::Gpu;
use softgpu_engine::logging::init_logging;
use softgpu_engine::math::Vec3;

use crate::camera::{OrbitCamera, Projection};
use crate::config::{Args, StudioConfig};
use crate::mesh::Mesh;
use crate::phong::PhongMethod;
use crate::timer::FrameTimer;

const SPHERE_RADIUS: f32 = 0.5;
const LIGHT: Vec3 = Vec3::new(10.0, 10.0, 10.0);

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::try_from(Args::parse())?;
    init_logging(config.logging());
    run(&config)
}

fn run(config: &StudioConfig) -> anyhow::Result<()> {
    let mut timer = FrameTimer::start();
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(config.width, config.height);

    let mesh = Mesh::uv_sphere(SPHERE_RADIUS, config.stacks, config.slices);
    let method = PhongMethod::new(&mut gpu, &mesh);

    let camera = OrbitCamera::default();
    let view = camera.view();
    let proj = Projection::new(config.aspect()).matrix();
    let eye = camera.eye();

    log::info!(
        "rendering {} frame(s) at {}x{}, {} triangles",
        config.frames,
        config.width,
        config.height,
        mesh.index_count() / 3
    );

    timer.reset();
    for _ in 0..config.frames {
        method.draw(&mut gpu, proj, view, LIGHT, eye);
        timer.tick();
    }
    log::debug!("{} frames in {:?}", timer.frames(), timer.elapsed());
    let seconds = timer.seconds_per_frame().unwrap_or_default();
    println!("Seconds per frame: {seconds:.10e}");

    output::save_png(gpu.framebuffer(), &config.output)?;

    method.release(&mut gpu);
    gpu.delete_framebuffer();
    Ok(())
}
