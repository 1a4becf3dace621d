use rocket::{
    http::Status,
    response::{self, Responder},
    Request,
};
use thiserror::Error;

use carnet_core::{repositories, usecases};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] usecases::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, _: &Request<'_>) -> response::Result<'o> {
        use repositories::Error as RepoError;
        log::error!("request failed: {self}");
        match self {
            AppError::Repo(RepoError::NotFound(_))
            | AppError::Usecase(usecases::Error::Repo(RepoError::NotFound(_))) => {
                Err(Status::NotFound)
            }
            _ => Err(Status::InternalServerError),
        }
    }
}
