pub(crate) const LOGO: &[u8] = include_bytes!("../../assets/svg/logo.svg");
pub(crate) const TOGGLE_COLLAPSE: &[u8] =
    include_bytes!("../../assets/svg/angle-left.svg");
pub(crate) const TOGGLE_EXPAND: &[u8] =
    include_bytes!("../../assets/svg/angle-right.svg");
pub(crate) const ROUTE_HOUSE: &[u8] =
    include_bytes!("../../assets/svg/house.svg");
pub(crate) const ROUTE_CHART_LINE: &[u8] =
    include_bytes!("../../assets/svg/chart-line.svg");
pub(crate) const ROUTE_CHART_COLUMN: &[u8] =
    include_bytes!("../../assets/svg/chart-column.svg");
pub(crate) const ROUTE_WALLET: &[u8] =
    include_bytes!("../../assets/svg/wallet.svg");
pub(crate) const ROUTE_CHART_PIE: &[u8] =
    include_bytes!("../../assets/svg/chart-pie.svg");
pub(crate) const ROUTE_ENVELOPE: &[u8] =
    include_bytes!("../../assets/svg/envelope.svg");
pub(crate) const ROUTE_SLIDERS: &[u8] =
    include_bytes!("../../assets/svg/sliders.svg");
pub(crate) const ROUTE_PHONE_VOLUME: &[u8] =
    include_bytes!("../../assets/svg/phone-volume.svg");
