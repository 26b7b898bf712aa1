use dioxus::prelude::*;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "shuffle" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "16 3 21 3 21 8" }
                line {
                    x1: "4",
                    y1: "20",
                    x2: "21",
                    y2: "3",
                }
                polyline { points: "21 16 21 21 16 21" }
                line {
                    x1: "15",
                    y1: "15",
                    x2: "21",
                    y2: "21",
                }
                line {
                    x1: "4",
                    y1: "4",
                    x2: "9",
                    y2: "9",
                }
            }
        },
        // Shuffle off: straight-through arrows.
        "arrows-right" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M3 7h18" }
                polyline { points: "17 3 21 7 17 11" }
                path { d: "M3 17h18" }
                polyline { points: "17 13 21 17 17 21" }
            }
        },
        "play" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        "pause" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect {
                    x: "6",
                    y: "4",
                    width: "4",
                    height: "16",
                }
                rect {
                    x: "14",
                    y: "4",
                    width: "4",
                    height: "16",
                }
            }
        },
        "prev" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line {
                    x1: "5",
                    y1: "19",
                    x2: "5",
                    y2: "5",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "next" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "volume" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            }
        },
        "volume-mute" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                line {
                    x1: "23",
                    y1: "9",
                    x2: "17",
                    y2: "15",
                }
                line {
                    x1: "17",
                    y1: "9",
                    x2: "23",
                    y2: "15",
                }
            }
        },
        "music" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M9 18V5l12-2v13" }
                circle { cx: "6", cy: "18", r: "3" }
                circle { cx: "18", cy: "16", r: "3" }
            }
        },
        "refresh" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "23 4 23 10 17 10" }
                path { d: "M20.49 15a9 9 0 1 1-2.12-9.36L23 10" }
            }
        },
        "alert" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
                line {
                    x1: "12",
                    y1: "8",
                    x2: "12",
                    y2: "12",
                }
                line {
                    x1: "12",
                    y1: "16",
                    x2: "12.01",
                    y2: "16",
                }
            }
        },
        "loader" => rsx! {
            svg {
                class: "{class} spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    opacity: "0.25",
                }
                path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
            }
        },
        "instagram" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                rect {
                    x: "2",
                    y: "2",
                    width: "20",
                    height: "20",
                    rx: "5",
                    ry: "5",
                }
                path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
                line {
                    x1: "17.5",
                    y1: "6.5",
                    x2: "17.51",
                    y2: "6.5",
                }
            }
        },
        "youtube" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z" }
                polygon { points: "9.75 15.02 15.5 11.75 9.75 8.48 9.75 15.02" }
            }
        },
        "github" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}
