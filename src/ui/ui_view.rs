/*
 * File: ui_view.rs
 * Project: ui
 * Created Date: 19/10/2026
 * Author: Shun Suzuki
 * -----
 * Last Modified: 19/10/2026
 * Modified By: Shun Suzuki (suzuki@hapis.k.u-tokyo.ac.jp)
 * -----
 * Copyright (c) 2026 Hapis Lab. All rights reserved.
 *
 */

use anyhow::anyhow;
use camera_controllers::Camera;
use conrod_core::{widget, Colorable, Widget};
use log::error;
use piston_window::texture::UpdateTexture;
use piston_window::*;
use piston_window::{G2d, G2dTexture, TextureSettings};
use piston_window::{PistonWindow, UpdateEvent, Window, WindowSettings};
use room_tour::{Session, SessionStatus, UICommand};

use super::control_panel::ControlPanel;
use super::overlay_view::OverlayView;
use crate::camera_helper;
use crate::color;
use crate::map_view::MapView;

pub const PANEL_W: conrod_core::Scalar = 280.0;
pub const OVERLAY_H: conrod_core::Scalar = 180.0;
pub const MARGIN: conrod_core::Scalar = 20.0;

widget_ids! {
    pub struct Ids {
        canvas,
    }
}

pub struct App {
    pub panel: ControlPanel,
    pub overlays: OverlayView,
    pub session: Session,
    pub camera: Camera<f32>,
}

impl App {
    pub fn new(panel: ControlPanel, overlays: OverlayView, session: Session) -> Self {
        let mut camera = Camera::new(session.camera_pose().position);
        camera_helper::camera_set_pose(&mut camera, &session.camera_pose());
        App {
            panel,
            overlays,
            session,
            camera,
        }
    }
}

pub fn theme() -> conrod_core::Theme {
    use conrod_core::position::{Align, Direction, Padding, Position, Relative};
    conrod_core::Theme {
        name: "Tour Theme".to_string(),
        padding: Padding::none(),
        x_position: Position::Relative(Relative::Align(Align::Start), None),
        y_position: Position::Relative(Relative::Direction(Direction::Backwards, 20.0), None),
        background_color: color::DARK,
        shape_color: conrod_core::color::LIGHT_CHARCOAL,
        border_color: color::DARK,
        border_width: 0.0,
        label_color: conrod_core::color::WHITE,
        font_id: None,
        font_size_large: 26,
        font_size_medium: 18,
        font_size_small: 12,
        widget_styling: conrod_core::theme::StyleMap::default(),
        mouse_drag_threshold: 0.0,
        double_click_threshold: std::time::Duration::from_millis(500),
    }
}

pub fn gui(ui: &mut conrod_core::UiCell, ids: &Ids, app: &mut App) {
    widget::Canvas::new().color(color::ALPHA).set(ids.canvas, ui);

    app.panel.gui(ui, &app.session, ids.canvas);
    app.overlays.gui(ui, &app.session, ids.canvas);
}

fn key_command(key: Key) -> Option<UICommand> {
    match key {
        Key::Right => Some(UICommand::Next),
        Key::Left => Some(UICommand::Previous),
        Key::Return => Some(UICommand::Start),
        _ => None,
    }
}

pub fn window_2d(session: Session) -> anyhow::Result<()> {
    let width = session.setting().window_width;
    let height = session.setting().window_height;

    let mut window: PistonWindow = WindowSettings::new("Room Tour", [width, height])
        .opengl(OpenGL::V3_2)
        .samples(4)
        .exit_on_esc(true)
        .vsync(true)
        .build()
        .map_err(|e| anyhow!("failed to build window: {}", e))?;

    let mut ui = conrod_core::UiBuilder::new([width as f64, height as f64])
        .theme(theme())
        .build();

    let assets = find_folder::Search::KidsThenParents(3, 5)
        .for_folder("assets")
        .map_err(|e| anyhow!("assets folder not found: {:?}", e))?;
    let font_path = assets.join("fonts/DejaVuSans.ttf");
    ui.fonts
        .insert_from_file(&font_path)
        .map_err(|e| anyhow!("cannot load font {}: {:?}", font_path.display(), e))?;

    let mut text_vertex_data = Vec::new();
    let (mut glyph_cache, mut text_texture_cache) = {
        const SCALE_TOLERANCE: f32 = 0.1;
        const POSITION_TOLERANCE: f32 = 0.1;
        let cache = conrod_core::text::GlyphCache::builder()
            .dimensions(width, height)
            .scale_tolerance(SCALE_TOLERANCE)
            .position_tolerance(POSITION_TOLERANCE)
            .build();
        let buffer_len = width as usize * height as usize;
        let init = vec![128; buffer_len];
        let settings = TextureSettings::new();
        let factory = &mut window.factory;
        let texture = G2dTexture::from_memory_alpha(factory, &init, width, height, &settings)
            .map_err(|e| anyhow!("cannot create glyph texture: {:?}", e))?;
        (cache, texture)
    };

    let ids = Ids::new(ui.widget_id_generator());

    let image_map = conrod_core::image::Map::new();
    let to_cnt = session.ui_sender();
    let panel = ControlPanel::new(&session, to_cnt.clone(), &mut ui);
    let overlays = OverlayView::new(&session, to_cnt.clone(), &mut ui);
    let map_view = MapView::fit(
        session.setting(),
        [0., 0., width as f64 - PANEL_W, height as f64 - OVERLAY_H],
    );
    let mut app = App::new(panel, overlays, session);

    while let Some(event) = window.next() {
        if let Some(Button::Keyboard(key)) = event.press_args() {
            if let Some(cmd) = key_command(key) {
                to_cnt.send(cmd)?;
            }
        }

        let size = window.size();
        let (win_w, win_h) = (
            size.width as conrod_core::Scalar,
            size.height as conrod_core::Scalar,
        );
        if let Some(e) = conrod_piston::event::convert(event.clone(), win_w, win_h) {
            ui.handle_event(e);
        }

        if let Some(args) = event.update_args() {
            {
                let mut ui = ui.set_widgets();
                gui(&mut ui, &ids, &mut app);
            }
            app.session.update(args.dt as f32)?;
            camera_helper::camera_set_pose(&mut app.camera, &app.session.camera_pose());

            if app.session.status() == SessionStatus::Terminated {
                window.set_should_close(true);
            }
        }

        let session = &app.session;
        let camera = &app.camera;
        window.draw_2d(&event, |context, graphics| {
            clear(color::MAP_BACKGROUND, graphics);
            map_view.draw(session, camera, context, graphics);

            let primitives = ui.draw();
            let cache_queued_glyphs = |graphics: &mut G2d,
                                       cache: &mut G2dTexture,
                                       rect: conrod_core::text::rt::Rect<u32>,
                                       data: &[u8]| {
                let offset = [rect.min.x, rect.min.y];
                let size = [rect.width(), rect.height()];
                let format = piston_window::texture::Format::Rgba8;
                let encoder = &mut graphics.encoder;
                text_vertex_data.clear();
                text_vertex_data.extend(data.iter().flat_map(|&b| vec![255, 255, 255, b]));
                if let Err(e) = UpdateTexture::update(
                    cache,
                    encoder,
                    format,
                    &text_vertex_data[..],
                    offset,
                    size,
                ) {
                    error!("failed to update glyph texture: {:?}", e);
                }
            };

            fn texture_from_image<T>(img: &T) -> &T {
                img
            }

            conrod_piston::draw::primitives(
                primitives,
                context,
                graphics,
                &mut text_texture_cache,
                &mut glyph_cache,
                &image_map,
                cache_queued_glyphs,
                texture_from_image,
            );
        });
    }

    log::info!("window closed after {} session reloads", app.session.reloads());
    Ok(())
}
