//! Help-seeking donut with a category toggle. Switching categories retargets
//! the arcs and tweens them over a short transition driven by a coroutine,
//! so a stale timer from a rapid double-toggle can never move current arcs.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::aggregate::{help_seeking_counts, help_seeking_for_condition, HelpSeekingCounts};
use crate::core::geometry::{annular_sector_path, pie_angles, SliceAngles};
use crate::core::survey::{SurveyRow, CONDITIONS};
use crate::core::{format, platform, timing};

use super::tooltip::{ChartTooltip, TooltipState};

const OUTER_RADIUS: f64 = 190.0;
const INNER_RADIUS: f64 = 114.0;
const HOVER_BULGE: f64 = 8.0;
const SVG_SIZE: f64 = 440.0;

const TRANSITION_MS: u64 = 750;
const FRAME_MS: u64 = 16;

const SLICE_LABELS: [&str; 2] = ["Sought Help", "Did Not Seek Help"];
const SLICE_COLORS: [&str; 2] = ["#23007d", "#da0055"];

/// Toggle entries: the overall view first, then one per condition.
fn scope_label(index: usize) -> &'static str {
    if index == 0 {
        "All Students"
    } else {
        CONDITIONS[index - 1].label
    }
}

fn scope_count() -> usize {
    CONDITIONS.len() + 1
}

fn counts_for_scope(rows: &[SurveyRow], index: usize) -> HelpSeekingCounts {
    if index == 0 {
        help_seeking_counts(rows)
    } else {
        help_seeking_for_condition(rows, &CONDITIONS[index - 1])
    }
}

fn slice_values(counts: HelpSeekingCounts) -> [f64; 2] {
    [f64::from(counts.yes), f64::from(counts.no)]
}

fn target_angles(counts: HelpSeekingCounts) -> [SliceAngles; 2] {
    let angles = pie_angles(&slice_values(counts));
    [angles[0], angles[1]]
}

fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Tween state for the two arcs. `epoch` increments on every retarget so
/// ticks queued for an abandoned transition are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArcTween {
    from: [SliceAngles; 2],
    to: [SliceAngles; 2],
    progress: f64,
    epoch: u64,
}

impl ArcTween {
    fn settled(target: [SliceAngles; 2]) -> Self {
        Self {
            from: target,
            to: target,
            progress: 1.0,
            epoch: 0,
        }
    }

    /// Freeze the currently displayed angles as the new starting point and
    /// begin tweening towards `target`. Returns the new epoch.
    fn retarget(&mut self, target: [SliceAngles; 2]) -> u64 {
        self.from = self.current();
        self.to = target;
        self.progress = 0.0;
        self.epoch += 1;
        self.epoch
    }

    /// Advance by one frame. Returns true while more frames are needed.
    fn step(&mut self, epoch: u64, dt: f64) -> bool {
        if epoch != self.epoch || self.progress >= 1.0 {
            return false;
        }
        self.progress = (self.progress + dt).min(1.0);
        self.progress < 1.0
    }

    fn current(&self) -> [SliceAngles; 2] {
        let t = smoothstep(self.progress);
        [
            SliceAngles::lerp(self.from[0], self.to[0], t),
            SliceAngles::lerp(self.from[1], self.to[1], t),
        ]
    }
}

#[derive(Debug, Clone)]
enum DonutEvent {
    Select(usize),
    Tick { epoch: u64 },
}

fn queue_tick(sender_slot: Rc<RefCell<Option<UnboundedSender<DonutEvent>>>>, epoch: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(FRAME_MS).await;
            let _ = sender.unbounded_send(DonutEvent::Tick { epoch });
        });
    }
}

#[component]
pub fn HelpSeekingDonut(rows: Vec<SurveyRow>) -> Element {
    let scope = use_signal(|| 0usize);
    let tween = {
        let initial = counts_for_scope(&rows, 0);
        use_signal(move || ArcTween::settled(target_angles(initial)))
    };
    let tooltip = use_signal(|| Option::<TooltipState>::None);
    let hovered = use_signal(|| Option::<usize>::None);
    let pointer = use_signal(|| (0.0f64, 0.0f64));

    let sender_slot: Rc<RefCell<Option<UnboundedSender<DonutEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let rows_for_loop = rows.clone();
        let scope_ref = scope.clone();
        let tween_ref = tween.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<DonutEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let rows = rows_for_loop.clone();
            let mut scope_signal = scope_ref.clone();
            let mut tween_signal = tween_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        DonutEvent::Select(index) => {
                            if index >= scope_count() || scope_signal() == index {
                                continue;
                            }
                            scope_signal.set(index);
                            let target = target_angles(counts_for_scope(&rows, index));
                            let epoch = tween_signal.with_mut(|tween| tween.retarget(target));
                            queue_tick(sender_slot.clone(), epoch);
                        }
                        DonutEvent::Tick { epoch } => {
                            let dt = FRAME_MS as f64 / TRANSITION_MS as f64;
                            let more = tween_signal.with_mut(|tween| tween.step(epoch, dt));
                            if more {
                                queue_tick(sender_slot.clone(), epoch);
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let select_scope = {
        let coroutine = coroutine.clone();
        move |index: usize| {
            coroutine.send(DonutEvent::Select(index));
        }
    };

    let active_scope = scope();
    let counts = counts_for_scope(&rows, active_scope);
    let angles = tween().current();
    let center = SVG_SIZE / 2.0;
    let slice_counts = [counts.yes, counts.no];
    let total = counts.total();

    let on_svg_move = {
        let mut pointer = pointer;
        move |evt: MouseEvent| {
            let point = evt.element_coordinates();
            pointer.set((point.x, point.y));
        }
    };

    rsx! {
        div { class: "chart-card",
            div { class: "donut-toggle", role: "group",
                for index in 0..scope_count() {
                    button {
                        r#type: "button",
                        class: if active_scope == index {
                            "donut-toggle__button donut-toggle__button--active"
                        } else {
                            "donut-toggle__button"
                        },
                        onclick: {
                            let select_scope = select_scope.clone();
                            move |_| select_scope(index)
                        },
                        {scope_label(index)}
                    }
                }
            }

            div { class: "chart-frame",
                svg {
                    class: "chart chart--donut",
                    width: "{SVG_SIZE}",
                    height: "{SVG_SIZE + 60.0}",
                    onmousemove: on_svg_move,
                    text {
                        class: "chart-title",
                        x: "{center}", y: "30", text_anchor: "middle",
                        "Help-Seeking Behaviour"
                    }
                    text {
                        class: "chart-subtitle",
                        x: "{center}", y: "52", text_anchor: "middle",
                        if active_scope == 0 {
                            "Across all surveyed students"
                        } else {
                            "Among students reporting {scope_label(active_scope)}"
                        }
                    }

                    g { transform: "translate({center},{center + 60.0})",
                        for (slice, angle) in angles.iter().enumerate() {
                            path {
                                class: "donut__slice",
                                d: annular_sector_path(
                                    INNER_RADIUS,
                                    if hovered() == Some(slice) {
                                        OUTER_RADIUS + HOVER_BULGE
                                    } else {
                                        OUTER_RADIUS
                                    },
                                    *angle,
                                ),
                                fill: SLICE_COLORS[slice],
                                onmouseenter: {
                                    let mut hovered = hovered;
                                    move |_| hovered.set(Some(slice))
                                },
                                onmouseleave: {
                                    let mut hovered = hovered;
                                    let mut tooltip = tooltip;
                                    move |_| {
                                        hovered.set(None);
                                        tooltip.set(None);
                                    }
                                },
                            }
                        }

                        text {
                            class: "donut__figure",
                            x: "0", y: "-4", text_anchor: "middle",
                            "{counts.percent_did_not_seek()}%"
                        }
                        text {
                            class: "donut__caption",
                            x: "0", y: "26", text_anchor: "middle",
                            "did not seek help"
                        }
                    }
                }
                ChartTooltip {
                    tooltip: hovered().map(|slice| {
                        let (px, py) = pointer();
                        let share = if total > 0 {
                            f64::from(slice_counts[slice]) / f64::from(total) * 100.0
                        } else {
                            f64::NAN
                        };
                        TooltipState::new(px, py, SLICE_LABELS[slice])
                            .with_line(format::format_count(slice_counts[slice]))
                            .with_line(format::format_percent(share))
                    }),
                }
            }
        }
    }
}
