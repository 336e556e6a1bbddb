use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Grid,
    Wallet,
    TrendingUp,
    TrendingDown,
    Card,
    Chart,
    Calendar,
    Folder,
    Tag,
    User,
    Users,
    Shield,
    Settings,
    LogOut,
    Plus,
    Pencil,
    Trash,
    Close,
    ChevronLeft,
    ChevronRight,
    Chat,
    Send,
    Clock,
    Key,
}

impl Icon {
    fn path(&self) -> &'static str {
        match self {
            Icon::Grid => "M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z",
            Icon::Wallet => "M3 7h18v10H3zM16 7V5H5v2",
            Icon::TrendingUp => "M3 17l6-6 4 4 7-7M14 8h6v6",
            Icon::TrendingDown => "M3 7l6 6 4-4 7 7M14 16h6v-6",
            Icon::Card => "M3 7h18v10H3zM3 11h18",
            Icon::Chart => "M4 20V10M10 20V4M16 20v-6M22 20H2",
            Icon::Calendar => "M4 5h16v16H4zM4 10h16M8 3v4M16 3v4",
            Icon::Folder => "M3 6h6l2 2h10v11H3z",
            Icon::Tag => "M20 12l-8 8-9-9V3h8zM7.5 7.5h.01",
            Icon::User => "M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 11a4 4 0 100-8 4 4 0 000 8z",
            Icon::Users => "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75",
            Icon::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            Icon::Settings => "M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1",
            Icon::LogOut => "M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9",
            Icon::Plus => "M12 5v14M5 12h14",
            Icon::Pencil => "M17 3l4 4L7 21H3v-4z",
            Icon::Trash => "M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6",
            Icon::Close => "M18 6L6 18M6 6l12 12",
            Icon::ChevronLeft => "M15 18l-6-6 6-6",
            Icon::ChevronRight => "M9 18l6-6-6-6",
            Icon::Chat => "M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z",
            Icon::Send => "M22 2L11 13M22 2l-7 20-4-9-9-4z",
            Icon::Clock => "M12 22a10 10 0 100-20 10 10 0 000 20zM12 6v6l4 2",
            Icon::Key => "M21 2l-2 2M15.5 7.5l3 3L22 7l-3-3M11.4 12.6a5.5 5.5 0 11-7.8 7.8 5.5 5.5 0 017.8-7.8z",
        }
    }
}

pub fn icon(kind: Icon) -> Html {
    sized_icon(kind, 20)
}

pub fn sized_icon(kind: Icon, size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={kind.path()}></path>
        </svg>
    }
}
