mod browse;
mod detail;
mod favorites;
