use env_logger::Env;
use iced::time::{self, Instant};
use iced::widget::{Row, button, column, container, text};
use iced::{Element, Length, Subscription, Task};
use log::{info, warn};
use swatch_ui_palette::{
    DASH_TICK, Event, GridSettings, Input, PaletteColor, PaletteGrid,
    PaletteSelector, SelectionGranularity,
};

const BLOCK_SIZE: u32 = 24;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    Palette(Input),
    Granularity(SelectionGranularity),
    ToggleIndexes,
}

struct App {
    grid: PaletteGrid,
    shown_at: Instant,
    now: Instant,
    last_click: Option<(usize, PaletteColor)>,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let settings = GridSettings::default()
            .with_block_size(BLOCK_SIZE)
            .with_granularity(SelectionGranularity::Unit4);
        let now = Instant::now();

        (
            App {
                grid: PaletteGrid::new(settings).with_colors(demo_palette()),
                shown_at: now,
                now,
                last_click: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Palette selector example")
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(DASH_TICK).map(Message::Tick)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.now = now,
            Message::Palette(input) => match self.grid.handle_input(input) {
                Ok(events) => events.into_iter().for_each(|event| {
                    self.handle_grid_event(event);
                }),
                Err(err) => warn!("palette input ignored: {err}"),
            },
            Message::Granularity(granularity) => {
                if let Some(event) = self.grid.set_granularity(granularity) {
                    self.handle_grid_event(event);
                }
            },
            Message::ToggleIndexes => {
                let show = !self.grid.settings().show_indexes;
                self.grid.set_show_indexes(show);
            },
        }
        Task::none()
    }

    fn handle_grid_event(&mut self, event: Event) {
        match event {
            Event::ColorClicked { index, color } => {
                info!("color {index:02X} clicked: {color}");
                self.last_click = Some((index, color));
            },
            Event::SelectionChanged { unit } => {
                info!("selected unit {unit}");
            },
        }
    }

    /// Selected unit and the first color it covers.
    fn selection_status(&self) -> String {
        let unit = self.grid.selected_unit();
        let Some(size) = self.grid.granularity().unit_size() else {
            return format!("unit {unit}");
        };
        match self.grid.colors().and_then(|colors| colors.get(unit * size)) {
            Some(&first) => format!("unit {unit} from {}", PaletteColor(first)),
            None => format!("unit {unit}"),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let modes = [
            SelectionGranularity::None,
            SelectionGranularity::Unit1,
            SelectionGranularity::Unit4,
            SelectionGranularity::Unit16,
        ]
        .into_iter()
        .fold(Row::new().spacing(8), |row, granularity| {
            row.push(
                button(text(format!("{granularity:?}")))
                    .on_press(Message::Granularity(granularity)),
            )
        })
        .push(button(text("Indexes")).on_press(Message::ToggleIndexes));

        let selector = PaletteSelector::new(&self.grid)
            .elapsed(self.now.saturating_duration_since(self.shown_at))
            .on_input(Message::Palette)
            .view();

        let status = match self.last_click {
            Some((index, color)) => format!(
                "{} | last click {index:02X} {color}",
                self.selection_status()
            ),
            None => self.selection_status(),
        };

        container(column![modes, selector, text(status)].spacing(16))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn demo_palette() -> Vec<u32> {
    (0..256u32)
        .map(|index| {
            let low = (index & 0x0F) as u8;
            let high = (index >> 4) as u8;
            PaletteColor::from_rgb(low * 17, high * 17, 0x80 ^ (low * 8))
                .packed()
        })
        .collect()
}
