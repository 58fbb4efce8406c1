use crate::entry::NavEntry;

use ride_core::UserRole;

const GUEST_MENU: [NavEntry; 3] = [
    NavEntry::new("/driver/post", "Drive"),
    NavEntry::new("/passenger/search", "Ride"),
    NavEntry::new("/how-it-works", "How it Works"),
];

const DRIVER_MENU: [NavEntry; 3] = [
    NavEntry::new("/dashboard", "Dashboard"),
    NavEntry::new("/driver/post", "Post Trip"),
    NavEntry::new("/driver/trips", "My Trips"),
];

const PASSENGER_MENU: [NavEntry; 3] = [
    NavEntry::new("/dashboard", "Dashboard"),
    NavEntry::new("/passenger/search", "Find Ride"),
    NavEntry::new("/passenger/bookings", "My Bookings"),
];

/// Maps session state to the ordered navigation menu.
///
/// Unauthenticated visitors always get the guest menu, whatever role
/// value is passed alongside. An authenticated session always carries a
/// role, so `role` is only consulted when `authenticated` is true.
pub fn navigation_for(authenticated: bool, role: Option<UserRole>) -> &'static [NavEntry] {
    if !authenticated {
        return &GUEST_MENU;
    }

    match role {
        Some(UserRole::Driver) => &DRIVER_MENU,
        _ => &PASSENGER_MENU,
    }
}
