mod helpers;
mod weather_page;
