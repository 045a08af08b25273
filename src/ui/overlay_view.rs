/*
 * File: overlay_view.rs
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
use room_tour::nav_buttons::{self, Corner, NavButton};
use room_tour::overlay::OverlayId;
use room_tour::{Session, UICommand};

use crate::color;
use crate::ui::ui_view::{MARGIN, OVERLAY_H, PANEL_W};

use std::sync::mpsc::Sender;

const NAV_BUTTON_W: f64 = 110.0;
const NAV_BUTTON_H: f64 = 36.0;

widget_ids! {
    pub struct Ids {
        canvas[],
        title[],
        text[],
        next[],
        prev[],
    }
}

/// One canvas per overlay; only the visible one is set each frame.
pub struct OverlayView {
    overlays: Vec<OverlayId>,
    buttons: Vec<Option<[NavButton; 2]>>,
    to_cnt: Sender<UICommand>,
    ids: Ids,
}

impl OverlayView {
    pub fn new(session: &Session, to_cnt: Sender<UICommand>, ui: &mut conrod_core::Ui) -> Self {
        let overlays: Vec<OverlayId> = session.overlays().ids().cloned().collect();
        let mut attached = nav_buttons::nav_buttons(session.setting());
        let buttons = overlays
            .iter()
            .map(|id| {
                attached
                    .iter()
                    .position(|(o, _)| o == id)
                    .map(|i| attached.swap_remove(i).1)
            })
            .collect();

        let n = overlays.len();
        let mut ids = Ids::new(ui.widget_id_generator());
        ids.canvas.resize(n, &mut ui.widget_id_generator());
        ids.title.resize(n, &mut ui.widget_id_generator());
        ids.text.resize(n, &mut ui.widget_id_generator());
        ids.next.resize(n, &mut ui.widget_id_generator());
        ids.prev.resize(n, &mut ui.widget_id_generator());

        OverlayView {
            overlays,
            buttons,
            to_cnt,
            ids,
        }
    }

    pub fn gui(&mut self, ui: &mut conrod_core::UiCell, session: &Session, parent: widget::Id) {
        for (i, id) in self.overlays.iter().enumerate() {
            if !session.overlays().is_visible(id) {
                continue;
            }
            let (title, text) = session
                .setting()
                .overlay_content(id)
                .unwrap_or((id.as_str(), ""));

            let canvas = self.ids.canvas[i];
            widget::Canvas::new()
                .w_h(ui.win_w - PANEL_W, OVERLAY_H)
                .bottom_left_of(parent)
                .color(color::OVERLAY)
                .set(canvas, ui);

            widget::Text::new(title)
                .font_size(26)
                .color(color::WHITE)
                .top_left_with_margins_on(canvas, MARGIN, MARGIN)
                .set(self.ids.title[i], ui);

            widget::Text::new(text)
                .font_size(16)
                .color(color::GRAY)
                .down_from(self.ids.title[i], 10.)
                .align_left_of(self.ids.title[i])
                .set(self.ids.text[i], ui);

            if let Some(buttons) = &self.buttons[i] {
                for button in buttons {
                    let widget_id = match button.command {
                        UICommand::Next => self.ids.next[i],
                        _ => self.ids.prev[i],
                    };
                    let w = widget::Button::new()
                        .label(button.label)
                        .w_h(NAV_BUTTON_W, NAV_BUTTON_H);
                    let w = match button.corner {
                        Corner::BottomRight => w.bottom_right_with_margin_on(canvas, button.inset),
                        Corner::BottomLeft => w.bottom_left_with_margin_on(canvas, button.inset),
                    };
                    for _ in w.set(widget_id, ui) {
                        if self.to_cnt.send(button.command.clone()).is_err() {
                            warn!("tour controller is gone");
                        }
                    }
                }
            }
        }
    }
}
