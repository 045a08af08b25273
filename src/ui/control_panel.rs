/*
 * File: control_panel.rs
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

use conrod_core::Colorable;
use conrod_core::{widget, Labelable, Positionable, Sizeable, Widget};
use log::warn;
use room_tour::{Session, TransitionMode, UICommand};

use crate::color;
use crate::ui::ui_view::{MARGIN, PANEL_W};

use std::sync::mpsc::Sender;

const BUTTON_W: f64 = PANEL_W - MARGIN * 2.0;
const HALF_BUTTON_W: f64 = (BUTTON_W - 10.) / 2.0;
const BUTTON_H: f64 = 36.0;

widget_ids! {
    pub struct Ids {
        canvas,
        title,
        start,
        prev,
        next,
        duration,
        direct,
        reload,
        exit,
        sep,
        status_title,
        status[],
    }
}

/// Buttons, duration slider and direct-transition toggle.
pub struct ControlPanel {
    to_cnt: Sender<UICommand>,
    duration_range: [f32; 2],
    ids: Ids,
}

impl ControlPanel {
    pub fn new(session: &Session, to_cnt: Sender<UICommand>, ui: &mut conrod_core::Ui) -> Self {
        let mut ids = Ids::new(ui.widget_id_generator());
        ids.status.resize(3, &mut ui.widget_id_generator());

        ControlPanel {
            to_cnt,
            duration_range: session.setting().duration_range,
            ids,
        }
    }

    fn send(&self, cmd: UICommand) {
        if self.to_cnt.send(cmd).is_err() {
            warn!("tour controller is gone");
        }
    }

    pub fn gui(&mut self, ui: &mut conrod_core::UiCell, session: &Session, parent: widget::Id) {
        let ids = &self.ids;
        widget::Canvas::new()
            .w_h(PANEL_W, ui.win_h)
            .top_right_of(parent)
            .color(color::DARK)
            .set(ids.canvas, ui);

        widget::Text::new("Tour")
            .font_size(26)
            .color(color::WHITE)
            .top_left_with_margins_on(ids.canvas, MARGIN, MARGIN)
            .set(ids.title, ui);

        self.navigation_gui(ui);
        self.transition_gui(ui, session);
        self.session_gui(ui, session);
        self.status_gui(ui, session);
    }

    fn navigation_gui(&self, ui: &mut conrod_core::UiCell) {
        let ids = &self.ids;
        for _ in widget::Button::new()
            .label("Start")
            .w_h(BUTTON_W, BUTTON_H)
            .down_from(ids.title, MARGIN)
            .align_left_of(ids.title)
            .set(ids.start, ui)
        {
            self.send(UICommand::Start);
        }

        for _ in widget::Button::new()
            .label("Previous")
            .w_h(HALF_BUTTON_W, BUTTON_H)
            .down_from(ids.start, 10.)
            .set(ids.prev, ui)
        {
            self.send(UICommand::Previous);
        }

        for _ in widget::Button::new()
            .label("Next")
            .w_h(HALF_BUTTON_W, BUTTON_H)
            .right_from(ids.prev, 10.)
            .set(ids.next, ui)
        {
            self.send(UICommand::Next);
        }
    }

    fn transition_gui(&self, ui: &mut conrod_core::UiCell, session: &Session) {
        let ids = &self.ids;
        let state = session.state();

        let label = format!("Duration: {:.1} s", state.transition_duration);
        if let Some(d) = widget::Slider::new(
            state.transition_duration,
            self.duration_range[0],
            self.duration_range[1],
        )
        .label(&label)
        .label_font_size(14)
        .w_h(BUTTON_W, BUTTON_H)
        .down_from(ids.prev, MARGIN)
        .align_left_of(ids.start)
        .set(ids.duration, ui)
        {
            self.send(UICommand::SetTransitionDuration(d));
        }

        let direct = state.transition_mode == TransitionMode::Instant;
        for direct in widget::Toggle::new(direct)
            .label("Direct transition")
            .label_font_size(14)
            .w_h(BUTTON_W, BUTTON_H)
            .down_from(ids.duration, 10.)
            .set(ids.direct, ui)
        {
            self.send(UICommand::SetDirectTransition(direct));
        }
    }

    fn session_gui(&self, ui: &mut conrod_core::UiCell, session: &Session) {
        let ids = &self.ids;
        for _ in widget::Button::new()
            .label("Reload")
            .w_h(BUTTON_W, BUTTON_H)
            .down_from(ids.direct, MARGIN)
            .set(ids.reload, ui)
        {
            self.send(UICommand::Reload);
        }

        if session.exit_visible() {
            for _ in widget::Button::new()
                .label("Exit")
                .w_h(BUTTON_W, BUTTON_H)
                .down_from(ids.reload, 10.)
                .set(ids.exit, ui)
            {
                self.send(UICommand::Exit);
            }
        }

        widget::Rectangle::fill_with([BUTTON_W, 2.], color::GRAY)
            .align_left_of(ids.reload)
            .down_from(ids.reload, BUTTON_H + MARGIN)
            .set(ids.sep, ui);
    }

    fn status_gui(&self, ui: &mut conrod_core::UiCell, session: &Session) {
        let ids = &self.ids;
        widget::Text::new("Status")
            .font_size(18)
            .color(color::WHITE)
            .down_from(ids.sep, MARGIN)
            .align_left_of(ids.sep)
            .set(ids.status_title, ui);

        let waypoints = session.navigator().waypoints();
        let room = match session.navigator().current_waypoint() {
            Some(w) => format!(
                "Room: {} ({}/{})",
                w.name,
                session.state().current_index().map_or(0, |i| i + 1),
                waypoints.len()
            ),
            None => "Room: not started".to_owned(),
        };
        let p = session.camera_pose().position;
        let camera = format!("Camera: {:.2}, {:.2}, {:.2}", p[0], p[1], p[2]);
        let laps = format!("Laps: {}", session.reloads());

        let lines = [room, camera, laps];
        for (i, text) in lines.iter().enumerate() {
            let w = widget::Text::new(text).font_size(14).color(color::GRAY);
            let w = if i == 0 {
                w.down_from(ids.status_title, 10.)
            } else {
                w.down_from(ids.status[i - 1], 5.)
            };
            w.align_left_of(ids.status_title).set(ids.status[i], ui);
        }
    }
}
