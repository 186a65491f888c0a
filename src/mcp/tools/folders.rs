// src/mcp/tools/folders.rs
// Folder tools

use rmcp::model::CallToolResult;

use crate::client::ZephyrClient;
use crate::client::folders::CreateFolder;
use crate::mcp::requests::{CreateFolderRequest, GetFolderRequest, ListFoldersRequest};
use crate::mcp::responses::{failure, success};

use super::DEFAULT_PAGE_SIZE;

pub async fn list_folders(client: &ZephyrClient, req: ListFoldersRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_folders(
            &req.project_key,
            req.folder_type.map(|t| t.as_str()),
            max_results,
            start_at,
        )
        .await
    {
        Ok(folders) => success("Folders retrieved successfully", [("folders", folders)]),
        Err(err) => failure(
            &format!("Error listing folders for project: {}", req.project_key),
            &err,
        ),
    }
}

pub async fn create_folder(client: &ZephyrClient, req: CreateFolderRequest) -> CallToolResult {
    let payload = CreateFolder {
        project_key: req.project_key,
        name: req.name.clone(),
        folder_type: req.folder_type.as_str().to_string(),
        parent_id: req.parent_id,
    };
    match client.create_folder(&payload).await {
        Ok(folder) => success("Folder created successfully", [("folder", folder)]),
        Err(err) => failure(&format!("Error creating folder: {}", req.name), &err),
    }
}

pub async fn get_folder(client: &ZephyrClient, req: GetFolderRequest) -> CallToolResult {
    match client.get_folder(req.folder_id).await {
        Ok(folder) => success("Folder retrieved successfully", [("folder", folder)]),
        Err(err) => failure(
            &format!("Error retrieving folder ID: {}", req.folder_id),
            &err,
        ),
    }
}
