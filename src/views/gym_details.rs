use super::layout::render_page;
use crate::models::Gym;
use crate::utils::escape_html;

pub fn render_gym_details(gym: &Gym) -> String {
    let content = format!(
        "<div class=\"bg-white rounded-lg shadow-md overflow-hidden\">
    <img src=\"{banner}\" alt=\"{name}\" class=\"w-full h-64 object-cover\" />
    <div class=\"p-6\">
        <h1 class=\"text-3xl font-bold mb-4\">{name}</h1>
        <p class=\"text-gray-600 mb-4 flex items-center\">{address}</p>
        <div class=\"flex items-center mb-4\">
            <span class=\"text-xl font-semibold\">{rating:.1}</span>
        </div>
        <p class=\"text-gray-700 mb-4\">{description}</p>
        <div class=\"mb-4\">
            <h2 class=\"text-xl font-semibold mb-2\">Hours</h2>
            <p class=\"text-gray-600 flex items-center\">{hours}</p>
        </div>
        <div class=\"mb-6\">
            <h2 class=\"text-xl font-semibold mb-2\">Pricing</h2>
            <p class=\"text-gray-600 flex items-center mb-1\">Hourly: ${hourly}</p>
            <p class=\"text-gray-600 flex items-center\">Monthly: ${monthly}</p>
        </div>
        <a href=\"/booking/{id}\" class=\"bg-blue-600 text-white px-6 py-3 rounded-full text-lg font-semibold inline-block hover:bg-blue-700 transition duration-300\">
            Book Now
        </a>
    </div>
</div>",
        banner = escape_html(&gym.banner_url()),
        name = escape_html(&gym.name),
        address = escape_html(&gym.address),
        rating = gym.rating,
        description = escape_html(&gym.description),
        hours = escape_html(&gym.hours),
        hourly = gym.pricing.hourly,
        monthly = gym.pricing.monthly,
        id = gym.id,
    );
    render_page(&gym.name, &content)
}
