pub mod api_envelope;
