use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Device silhouette drawn around the screen content.
pub enum Device {
    /// Notched phone.
    #[default]
    Iphone,
    /// Punch-hole phone.
    Android,
    /// Smartwatch with a crown.
    Watch,
    /// Laptop lid and keyboard base.
    Laptop,
    /// Tablet.
    Ipad,
    /// Desktop monitor on a stand.
    Imac,
}

impl Device {
    fn token(self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Android => "android",
            Self::Watch => "watch",
            Self::Laptop => "laptop",
            Self::Ipad => "ipad",
            Self::Imac => "imac",
        }
    }

    /// Outer frame geometry.
    fn frame(self) -> &'static str {
        match self {
            Self::Iphone => "relative mx-auto h-[600px] w-[300px] rounded-[2.5rem] border-[14px]",
            Self::Android => "relative mx-auto h-[600px] w-[300px] rounded-[2rem] border-[14px]",
            Self::Watch => "relative mx-auto h-[294px] w-[208px] rounded-[2.5rem] border-[10px]",
            Self::Laptop => {
                "relative mx-auto h-[172px] w-full max-w-[301px] rounded-t-xl border-[8px] md:h-[294px] md:max-w-[512px]"
            }
            Self::Ipad => "relative mx-auto h-[454px] w-[341px] rounded-[2.5rem] border-[14px] md:h-[682px] md:w-[512px]",
            Self::Imac => {
                "relative mx-auto h-[172px] w-full max-w-[301px] rounded-t-xl border-[16px] md:h-[294px] md:max-w-[512px]"
            }
        }
    }

    /// Screen area inside the frame.
    fn screen(self) -> &'static str {
        match self {
            Self::Iphone | Self::Android => "h-[572px] w-[272px] overflow-hidden rounded-[2rem]",
            Self::Watch => "h-[274px] w-[188px] overflow-hidden rounded-[2rem]",
            Self::Laptop | Self::Imac => "h-[156px] overflow-hidden rounded-lg md:h-[278px]",
            Self::Ipad => "h-[426px] w-[313px] overflow-hidden rounded-[2rem] md:h-[654px] md:w-[484px]",
        }
    }

    /// Hardware details drawn on the frame edges, absolutely positioned.
    fn side_parts(self) -> &'static [&'static str] {
        match self {
            Self::Iphone => &[
                "absolute left-1/2 top-0 h-[18px] w-[148px] -translate-x-1/2 rounded-b-[1rem]",
                "absolute -start-[17px] top-[124px] h-[46px] w-[3px] rounded-s-lg",
                "absolute -start-[17px] top-[178px] h-[46px] w-[3px] rounded-s-lg",
                "absolute -end-[17px] top-[142px] h-[64px] w-[3px] rounded-e-lg",
            ],
            Self::Android => &[
                "absolute -start-[17px] top-[72px] h-[32px] w-[3px] rounded-s-lg",
                "absolute -start-[17px] top-[124px] h-[46px] w-[3px] rounded-s-lg",
                "absolute -end-[17px] top-[142px] h-[64px] w-[3px] rounded-e-lg",
            ],
            Self::Watch => &[
                "absolute -end-[17px] top-[40px] h-[41px] w-[5px] rounded-e-lg",
                "absolute -end-[15px] top-[100px] h-[32px] w-[3px] rounded-e-lg",
            ],
            Self::Ipad => &[
                "absolute -start-[17px] top-[124px] h-[46px] w-[3px] rounded-s-lg",
                "absolute -end-[17px] top-[142px] h-[64px] w-[3px] rounded-e-lg",
            ],
            Self::Laptop | Self::Imac => &[],
        }
    }

    /// Base or stand rendered below the frame.
    fn base(self) -> Option<&'static str> {
        match self {
            Self::Laptop => Some(
                "relative mx-auto h-[17px] max-w-[351px] rounded-b-xl rounded-t-sm md:h-[21px] md:max-w-[597px]",
            ),
            Self::Imac => Some(
                "relative mx-auto h-[24px] max-w-[301px] rounded-b-xl md:h-[42px] md:max-w-[512px]",
            ),
            _ => None,
        }
    }
}

fn frame_color(color: &Color) -> String {
    match color {
        Color::Custom(raw) => raw.clone(),
        Color::White => "border-[#E5E7EB] bg-[#E5E7EB]".to_string(),
        Color::Dark => "border-[#1F2937] bg-[#1F2937] dark:border-[#374151]".to_string(),
        named => {
            let hex = frame_hex(named);
            format!("border-[{hex}] bg-[{hex}]")
        }
    }
}

fn part_color(color: &Color) -> String {
    match color {
        Color::Custom(raw) => raw.clone(),
        Color::White => "bg-[#D1D5DB]".to_string(),
        Color::Dark => "bg-[#1F2937] dark:bg-[#374151]".to_string(),
        named => format!("bg-[{}]", frame_hex(named)),
    }
}

fn frame_hex(color: &Color) -> &'static str {
    match color {
        Color::Natural => "#4B4B4B",
        Color::Primary => "#007F8C",
        Color::Secondary => "#266EF1",
        Color::Success => "#0E8345",
        Color::Warning => "#CA8D01",
        Color::Danger => "#DE1135",
        Color::Info => "#0B84BA",
        Color::Silver => "#868686",
        Color::Misc => "#8750C5",
        Color::Dawn => "#A86438",
        Color::White => "#E5E7EB",
        Color::Dark | Color::Custom(_) => "#1F2937",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a device mockup.
pub struct DeviceStyle {
    /// Device silhouette.
    pub device: Device,
    /// Frame color.
    pub color: Color,
}

impl Default for DeviceStyle {
    fn default() -> Self {
        Self {
            device: Device::Iphone,
            color: Color::Dark,
        }
    }
}

impl DeviceStyle {
    /// Class string for the frame.
    pub fn frame_classes(&self) -> String {
        ClassList::new()
            .with(self.device.frame())
            .with(frame_color(&self.color))
            .build()
    }

    /// Class string for the screen area.
    pub fn screen_classes(&self) -> String {
        ClassList::new()
            .with(self.device.screen())
            .with("bg-white dark:bg-[#111827]")
            .build()
    }

    /// Class strings for the side buttons, notch, and crown.
    pub fn part_classes(&self) -> Vec<String> {
        let tint = part_color(&self.color);
        self.device
            .side_parts()
            .iter()
            .map(|part| format!("{part} {tint}"))
            .collect()
    }

    /// Class string for the laptop base or monitor stand.
    pub fn base_classes(&self) -> Option<String> {
        self.device
            .base()
            .map(|base| format!("{base} {}", part_color(&self.color)))
    }
}

#[component]
/// Device frame around a screenshot or live content.
pub fn DeviceMockup(
    #[prop(optional)] device: Device,
    #[prop(optional, into)] color: Option<Color>,
    /// Screenshot URL. Children are rendered on the screen when absent.
    #[prop(optional, into)]
    src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = use_theme();
    let style = DeviceStyle {
        device,
        color: pick(color, theme.color.as_ref(), DeviceStyle::default().color),
    };
    let parts = style
        .part_classes()
        .into_iter()
        .map(|part| view! { <div class=part aria-hidden="true"></div> })
        .collect_view();
    let screen = match src {
        Some(src) => view! {
            <img class="h-full w-full object-cover" src=src alt=alt.unwrap_or_default() />
        }
        .into_view(),
        None => children.map(|children| children()).into_view(),
    };

    view! {
        <div
            class=merge_layout_class("flex flex-col items-center".to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="device-mockup"
            data-ui-device=device.token()
        >
            <div class=style.frame_classes() data-ui-slot="frame">
                {parts}
                <div class=style.screen_classes() data-ui-slot="screen">
                    {screen}
                </div>
            </div>
            {style
                .base_classes()
                .map(|base| view! { <div class=base data-ui-slot="base" aria-hidden="true"></div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn named_colors_paint_frame_border_and_fill() {
        let style = DeviceStyle {
            color: Color::Primary,
            ..DeviceStyle::default()
        };
        assert!(style
            .frame_classes()
            .ends_with("border-[#007F8C] bg-[#007F8C]"));
        assert!(style.part_classes().iter().all(|part| part.ends_with("bg-[#007F8C]")));
    }

    #[test]
    fn custom_color_passes_through_to_every_part() {
        let style = DeviceStyle {
            device: Device::Laptop,
            color: Color::from("border-zinc-700 bg-zinc-700"),
        };
        assert!(style.frame_classes().ends_with("border-zinc-700 bg-zinc-700"));
        assert!(style
            .base_classes()
            .expect("laptop base")
            .ends_with("border-zinc-700 bg-zinc-700"));
    }

    #[test]
    fn only_desk_devices_have_a_base() {
        for device in [Device::Iphone, Device::Android, Device::Watch, Device::Ipad] {
            let style = DeviceStyle {
                device,
                ..DeviceStyle::default()
            };
            assert_eq!(style.base_classes(), None);
            assert!(!style.part_classes().is_empty());
        }
        let imac = DeviceStyle {
            device: Device::Imac,
            ..DeviceStyle::default()
        };
        assert!(imac.part_classes().is_empty());
        assert!(imac.base_classes().is_some());
    }
}
