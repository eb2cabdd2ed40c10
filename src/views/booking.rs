use super::layout::render_page;
use crate::models::{
    BookingFieldErrors, BookingForm, BookingGym, BookingRequest, SessionDuration, SubmissionState,
};
use crate::utils::escape_html;

const SUBMIT_LABEL: &str = "Book Now";
const PROCESSING_LABEL: &str = "Processing...";

fn field_error(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(
            "<p class=\"mt-2 text-sm text-red-600\">{}</p>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn duration_options(selected: &str) -> String {
    let mut options = vec!["<option value=\"\">Select duration</option>".to_string()];
    for duration in SessionDuration::ALL {
        let value = duration.hours().to_string();
        let selected_attr = if value == selected { " selected" } else { "" };
        options.push(format!(
            "<option value=\"{}\"{}>{}</option>",
            value,
            selected_attr,
            duration.label()
        ));
    }
    options.join("\n")
}

fn submit_button(state: &SubmissionState) -> String {
    let (label, disabled) = if state.is_processing() {
        (PROCESSING_LABEL, " disabled")
    } else {
        (SUBMIT_LABEL, "")
    };
    format!(
        "<button type=\"submit\"{disabled} class=\"w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700\">{label}</button>",
        disabled = disabled,
        label = label,
    )
}

/// The booking form with whatever the user entered, per-field messages and
/// the payment outcome of the last attempt.
pub fn render_booking_page(
    gym: &BookingGym,
    form: &BookingForm,
    errors: &BookingFieldErrors,
    state: &SubmissionState,
) -> String {
    let payment_error = state
        .payment_error()
        .map(|message| {
            format!(
                "<div class=\"text-red-600 text-sm\">{}</div>",
                escape_html(message)
            )
        })
        .unwrap_or_default();

    let content = format!(
        "<div class=\"max-w-2xl mx-auto\">
    <h1 class=\"text-3xl font-bold mb-6\">Book a Session at {name}</h1>
    <form method=\"post\" action=\"/booking/{id}\" class=\"space-y-6\" novalidate
          onsubmit=\"var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='{processing}';\">
        <div>
            <label for=\"date\" class=\"block text-sm font-medium text-gray-700\">Date</label>
            <input type=\"date\" id=\"date\" name=\"date\" value=\"{date}\" class=\"block w-full pl-10 sm:text-sm border-gray-300 rounded-md\" />
            {date_error}
        </div>
        <div>
            <label for=\"time\" class=\"block text-sm font-medium text-gray-700\">Time</label>
            <input type=\"time\" id=\"time\" name=\"time\" value=\"{time}\" class=\"block w-full pl-10 sm:text-sm border-gray-300 rounded-md\" />
            {time_error}
        </div>
        <div>
            <label for=\"duration\" class=\"block text-sm font-medium text-gray-700\">Duration</label>
            <select id=\"duration\" name=\"duration\" class=\"mt-1 block w-full pl-3 pr-10 py-2 text-base border-gray-300 sm:text-sm rounded-md\">
                {options}
            </select>
            {duration_error}
        </div>
        <div>
            <label for=\"card-number\" class=\"block text-sm font-medium text-gray-700\">Credit Card</label>
            <div class=\"mt-1 grid grid-cols-4 gap-2\">
                <input type=\"text\" id=\"card-number\" name=\"card_number\" inputmode=\"numeric\" autocomplete=\"cc-number\" placeholder=\"Card number\" class=\"col-span-2 border-gray-300 rounded-md\" />
                <input type=\"text\" name=\"card_expiry\" autocomplete=\"cc-exp\" placeholder=\"MM/YY\" class=\"border-gray-300 rounded-md\" />
                <input type=\"text\" name=\"card_cvc\" autocomplete=\"cc-csc\" placeholder=\"CVC\" class=\"border-gray-300 rounded-md\" />
            </div>
        </div>
        {payment_error}
        {button}
    </form>
</div>",
        name = escape_html(&gym.name),
        id = gym.id,
        processing = PROCESSING_LABEL,
        date = escape_html(&form.date),
        date_error = field_error(&errors.date),
        time = escape_html(&form.time),
        time_error = field_error(&errors.time),
        options = duration_options(&form.duration),
        duration_error = field_error(&errors.duration),
        payment_error = payment_error,
        button = submit_button(state),
    );
    render_page(&format!("Book {}", gym.name), &content)
}

pub fn render_booking_confirmation(request: &BookingRequest) -> String {
    let content = format!(
        "<div class=\"max-w-2xl mx-auto bg-white shadow rounded-lg p-6\">
    <h1 class=\"text-3xl font-bold mb-6\">Booking Confirmed</h1>
    <p><strong>{name}</strong></p>
    <p>{date} at {time} for {duration}</p>
    <p class=\"text-gray-600 mt-4\">Reference: {reference}</p>
</div>",
        name = escape_html(&request.gym.name),
        date = request.date,
        time = request.time.format("%-I:%M %p"),
        duration = request.duration,
        reference = request.reference,
    );
    render_page("Booking Confirmed", &content)
}
