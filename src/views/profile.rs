use super::layout::render_page;
use crate::models::UserProfile;
use crate::utils::escape_html;

pub fn render_profile(user: &UserProfile) -> String {
    let bookings = if user.upcoming_bookings.is_empty() {
        "<p>No upcoming bookings</p>".to_string()
    } else {
        let items: Vec<String> = user
            .upcoming_bookings
            .iter()
            .map(|booking| {
                format!(
                    "<li class=\"border-b pb-2\"><p><strong>{}</strong></p><p>{} at {}</p></li>",
                    escape_html(&booking.gym),
                    booking.date,
                    booking.display_time()
                )
            })
            .collect();
        format!("<ul class=\"space-y-2\">{}</ul>", items.join(""))
    };

    let methods = if user.payment_methods.is_empty() {
        "<p>No payment methods added</p>".to_string()
    } else {
        let items: Vec<String> = user
            .payment_methods
            .iter()
            .map(|method| {
                format!(
                    "<li class=\"flex items-center\"><span>{} ending in {}</span></li>",
                    escape_html(&method.card_type),
                    escape_html(&method.last4)
                )
            })
            .collect();
        format!("<ul class=\"space-y-2\">{}</ul>", items.join(""))
    };

    let content = format!(
        "<div class=\"max-w-4xl mx-auto\">
    <h1 class=\"text-3xl font-bold mb-6\">Your Profile</h1>
    <div class=\"bg-white shadow rounded-lg p-6 mb-6\">
        <h2 class=\"text-xl font-semibold mb-4\">Personal Information</h2>
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Member Since:</strong> {member_since}</p>
    </div>
    <div class=\"bg-white shadow rounded-lg p-6 mb-6\">
        <h2 class=\"text-xl font-semibold mb-4\">Upcoming Bookings</h2>
        {bookings}
    </div>
    <div class=\"bg-white shadow rounded-lg p-6\">
        <h2 class=\"text-xl font-semibold mb-4\">Payment Methods</h2>
        {methods}
    </div>
</div>",
        name = escape_html(&user.name),
        email = escape_html(&user.email),
        member_since = user.member_since,
        bookings = bookings,
        methods = methods,
    );
    render_page("Your Profile", &content)
}
