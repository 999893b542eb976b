//! Icon lookup for quick categories and navigation.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::*;
use dioxus_free_icons::Icon;

/// Renders a quick-category icon by its stored name. Unknown names fall
/// back to a tag.
#[component]
pub fn CategoryIcon(name: String, #[props(default = 18)] size: u32) -> Element {
    match name.as_str() {
        "ShoppingCart" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaCartShopping } },
        "Utensils" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaUtensils } },
        "Package" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaBox } },
        "Car" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaCar } },
        "Coffee" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaMugHot } },
        "Sparkles" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaStar } },
        "Home" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaHouse } },
        "Smartphone" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaPhone } },
        "Gift" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaGift } },
        "Plane" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaPlane } },
        "BookOpen" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaBookOpen } },
        "Shirt" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaShirt } },
        "Zap" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaBolt } },
        "Heart" => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaHeart } },
        _ => rsx! { Icon { width: size, height: size, fill: "currentColor", icon: FaTag } },
    }
}

/// CSS class for a quick-category color token.
pub fn color_class(color: &str) -> String {
    let token = match color {
        "red" | "blue" | "green" | "purple" | "pink" | "amber" | "cyan" | "gray" => color,
        _ => "gray",
    };
    format!("chip-{token}")
}

/// Navigation entries of the app shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Transactions,
    Budgets,
    Recurring,
    Assets,
    Analytics,
    Reports,
    Couple,
    Account,
    Admin,
}

#[component]
pub fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaHouse } },
        NavIcon::Transactions => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaList } },
        NavIcon::Budgets => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaWallet } },
        NavIcon::Recurring => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaRepeat } },
        NavIcon::Assets => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaPiggyBank } },
        NavIcon::Analytics => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaChartPie } },
        NavIcon::Reports => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaFileLines } },
        NavIcon::Couple => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaUserGroup } },
        NavIcon::Account => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaUser } },
        NavIcon::Admin => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaGear } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_class_falls_back() {
        assert_eq!(color_class("red"), "chip-red");
        assert_eq!(color_class("chartreuse"), "chip-gray");
    }
}
