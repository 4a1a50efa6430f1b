pub mod sample_requests;
