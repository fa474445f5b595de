use crate::common::*;

use crate::model::configs::warehouse_config::*;

use crate::dto::query_result_set::*;

use crate::traits::repository_traits::warehouse_repository::*;

#[doc = r#"
    BigQuery REST client (`jobs.query` + `jobs.getQueryResults`).

    Built once by `main` and handed to the extract service. Construction fails
    when no access token is available or the endpoint is not a valid URL; the
    caller treats that as "warehouse unavailable" for the rest of the run.
"#]
#[derive(Debug, Clone)]
pub struct BigQueryRepositoryImpl {
    client: Client,
    api_base_url: String,
    project_id: String,
    location: Option<String>,
    access_token: String,
}

impl BigQueryRepositoryImpl {
    pub fn new(config: &WarehouseConfig) -> Result<Self, anyhow::Error> {
        let access_token: String = config.resolve_access_token().ok_or_else(|| {
            anyhow!(
                "[BigQueryRepositoryImpl->new] No access token: set warehouse.access_token or {}",
                ACCESS_TOKEN_ENV
            )
        })?;

        let base_url: reqwest::Url = reqwest::Url::parse(config.api_base_url())
            .with_context(|| {
                format!(
                    "[BigQueryRepositoryImpl->new] Invalid api_base_url: {}",
                    config.api_base_url()
                )
            })?;

        if config.project_id().trim().is_empty() {
            return Err(anyhow!("[BigQueryRepositoryImpl->new] project_id is empty"));
        }

        let client: Client = Client::builder().build()?;

        Ok(BigQueryRepositoryImpl {
            client,
            api_base_url: base_url.as_str().trim_end_matches('/').to_string(),
            project_id: config.project_id().to_string(),
            location: config.location().clone(),
            access_token,
        })
    }

    fn queries_url(&self) -> String {
        format!("{}/projects/{}/queries", self.api_base_url, self.project_id)
    }

    #[doc = "Sends an authorized request and returns the JSON body of a 2xx response"]
    async fn send_checked(&self, request: reqwest::RequestBuilder) -> Result<Value, anyhow::Error> {
        let response: reqwest::Response = request.bearer_auth(&self.access_token).send().await?;
        let status: reqwest::StatusCode = response.status();

        if status.is_success() {
            let body: Value = response.json::<Value>().await?;
            Ok(body)
        } else {
            let error_body: String = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "[BigQuery Error][send_checked()] response status is {}: {}",
                status,
                error_body
            ))
        }
    }
}

#[doc = "`schema.fields[]` of a query response; absent schema means no columns"]
pub(crate) fn parse_schema(page: &Value) -> Result<Vec<WarehouseField>, anyhow::Error> {
    let Some(fields) = page.get("schema").and_then(|s| s.get("fields")) else {
        return Ok(Vec::new());
    };

    let arr: &Vec<Value> = fields
        .as_array()
        .ok_or_else(|| anyhow!("[parse_schema] 'schema.fields' is not an array"))?;

    arr.iter()
        .map(|field| {
            let name: String = field
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| anyhow!("[parse_schema] Missing or invalid field 'name'"))?
                .to_string();

            let field_type: String = field
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("STRING")
                .to_string();

            Ok(WarehouseField::new(name, field_type))
        })
        .collect()
}

#[doc = "Next `(jobId, pageToken, location)` to request, or None when the result is complete"]
pub(crate) fn next_page_request(
    page: &Value,
    default_location: Option<&str>,
) -> Result<Option<(String, Option<String>, Option<String>)>, anyhow::Error> {
    let job_complete: bool = page
        .get("jobComplete")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    let page_token: Option<String> = page
        .get("pageToken")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    if job_complete && page_token.is_none() {
        return Ok(None);
    }

    let job_ref: &Value = page
        .get("jobReference")
        .ok_or_else(|| anyhow!("[next_page_request] Missing 'jobReference' on an unfinished query"))?;

    let job_id: String = job_ref
        .get("jobId")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("[next_page_request] Missing 'jobReference.jobId'"))?
        .to_string();

    let location: Option<String> = job_ref
        .get("location")
        .and_then(|v| v.as_str())
        .or(default_location)
        .map(str::to_string);

    /* an unfinished job has no rows yet, so no token either: poll from the start */
    let page_token: Option<String> = if job_complete { page_token } else { None };

    Ok(Some((job_id, page_token, location)))
}

#[async_trait]
impl WarehouseRepository for BigQueryRepositoryImpl {
    #[doc = "Runs the statement with standard SQL and follows pagination until the last page"]
    async fn run_query(&self, sql: &str) -> Result<QueryResultSet, anyhow::Error> {
        let mut body: Value = json!({
            "query": sql,
            "useLegacySql": false
        });

        if let Some(location) = &self.location {
            body["location"] = json!(location);
        }

        let mut page: Value = self
            .send_checked(self.client.post(self.queries_url()).json(&body))
            .await?;

        let mut fields: Option<Vec<WarehouseField>> = None;
        let mut rows: Vec<Value> = Vec::new();

        loop {
            let job_complete: bool = page
                .get("jobComplete")
                .and_then(|v| v.as_bool())
                .unwrap_or(true);

            if job_complete {
                if fields.is_none() {
                    fields = Some(parse_schema(&page)?);
                }

                if let Some(page_rows) = page.get("rows").and_then(|r| r.as_array()) {
                    rows.extend(page_rows.iter().cloned());
                }
            }

            let Some((job_id, page_token, location)) =
                next_page_request(&page, self.location.as_deref())?
            else {
                break;
            };

            let mut params: Vec<(&str, String)> = Vec::new();
            if let Some(token) = page_token {
                params.push(("pageToken", token));
            }
            if let Some(location) = location {
                params.push(("location", location));
            }

            page = self
                .send_checked(
                    self.client
                        .get(format!("{}/{}", self.queries_url(), job_id))
                        .query(&params),
                )
                .await?;
        }

        Ok(QueryResultSet::new(fields.unwrap_or_default(), rows))
    }
}
