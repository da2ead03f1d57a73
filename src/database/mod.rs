pub mod participant_repo;
