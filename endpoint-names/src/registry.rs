//! Built-in service registry

use crate::error::NamesResult;
use crate::service::ServiceDefinition;
use crate::table::AliasTable;
use once_cell::sync::OnceCell;

/// Prefix of every per-service current endpoint variable
pub const CURRENT_ENV_VAR_PREFIX: &str = "AWS_ENDPOINT_URL_";

/// Endpoint variable shared by all services
pub const BASE_ENDPOINT_ENV_VAR: &str = "AWS_ENDPOINT_URL";

/// When `true`, endpoint URLs from the environment and the shared config file
/// are ignored
pub const IGNORE_CONFIGURED_ENDPOINT_URLS_ENV_VAR: &str = "AWS_IGNORE_CONFIGURED_ENDPOINT_URLS";

static DEFAULT_TABLE: OnceCell<AliasTable> = OnceCell::new();

/// The process-wide built-in alias table, built on first use
pub fn default_alias_table() -> NamesResult<&'static AliasTable> {
    DEFAULT_TABLE.get_or_try_init(|| AliasTable::new(builtin_services()))
}

fn builtin_services() -> Vec<ServiceDefinition> {
    vec![
        ServiceDefinition::new("accessanalyzer").with_sdk_id("AccessAnalyzer"),
        ServiceDefinition::new("acm").with_sdk_id("ACM"),
        ServiceDefinition::new("apigateway").with_sdk_id("API Gateway"),
        ServiceDefinition::new("ce")
            .with_aliases(["costexplorer"])
            .with_sdk_id("Cost Explorer"),
        ServiceDefinition::new("cloudformation").with_sdk_id("CloudFormation"),
        ServiceDefinition::new("cloudwatch").with_sdk_id("CloudWatch"),
        ServiceDefinition::new("cognitoidp")
            .with_aliases(["cognitoidentityprovider"])
            .with_sdk_id("Cognito Identity Provider"),
        ServiceDefinition::new("configservice")
            .with_aliases(["config"])
            .with_sdk_id("Config Service"),
        ServiceDefinition::new("dms")
            .with_aliases(["databasemigration", "databasemigrationservice"])
            .with_sdk_id("Database Migration Service"),
        ServiceDefinition::new("ds")
            .with_aliases(["directoryservice"])
            .with_sdk_id("Directory Service"),
        ServiceDefinition::new("dynamodb")
            .with_sdk_id("DynamoDB")
            .with_legacy_env_vars(),
        ServiceDefinition::new("ec2").with_sdk_id("EC2"),
        ServiceDefinition::new("ecr").with_sdk_id("ECR"),
        ServiceDefinition::new("ecs").with_sdk_id("ECS"),
        ServiceDefinition::new("eks").with_sdk_id("EKS"),
        ServiceDefinition::new("elasticsearch")
            .with_aliases(["es", "elasticsearchservice"])
            .with_sdk_id("Elasticsearch Service"),
        ServiceDefinition::new("events")
            .with_aliases(["eventbridge", "cloudwatchevents"])
            .with_sdk_id("EventBridge"),
        ServiceDefinition::new("iam")
            .with_sdk_id("IAM")
            .with_legacy_env_vars(),
        ServiceDefinition::new("kinesis").with_sdk_id("Kinesis"),
        ServiceDefinition::new("kms").with_sdk_id("KMS"),
        ServiceDefinition::new("lambda").with_sdk_id("Lambda"),
        ServiceDefinition::new("lexmodels")
            .with_aliases(["lexmodelbuilding", "lexmodelbuildingservice", "lex"])
            .with_sdk_id("Lex Model Building Service"),
        ServiceDefinition::new("logs")
            .with_aliases(["cloudwatchlog", "cloudwatchlogs"])
            .with_sdk_id("CloudWatch Logs"),
        ServiceDefinition::new("rds").with_sdk_id("RDS"),
        ServiceDefinition::new("route53").with_sdk_id("Route 53"),
        ServiceDefinition::new("s3")
            .with_aliases(["s3api"])
            .with_sdk_id("S3")
            .with_legacy_env_vars(),
        ServiceDefinition::new("secretsmanager").with_sdk_id("Secrets Manager"),
        ServiceDefinition::new("serverlessrepo")
            .with_aliases(["serverlessapprepo", "serverlessapplicationrepository"])
            .with_sdk_id("ServerlessApplicationRepository"),
        ServiceDefinition::new("sns").with_sdk_id("SNS"),
        ServiceDefinition::new("sqs").with_sdk_id("SQS"),
        ServiceDefinition::new("ssm").with_sdk_id("SSM"),
        ServiceDefinition::new("sts")
            .with_sdk_id("STS")
            .with_legacy_env_vars(),
        ServiceDefinition::new("transcribe")
            .with_aliases(["transcribeservice"])
            .with_sdk_id("Transcribe"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = default_alias_table().unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_builtin_table_is_shared() {
        let first = default_alias_table().unwrap();
        let second = default_alias_table().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_builtin_sts() {
        let table = default_alias_table().unwrap();
        let sts = table.service("sts").unwrap();
        assert_eq!(sts.env_var(), "AWS_ENDPOINT_URL_STS");
        assert_eq!(sts.tf_aws_env_var(), Some("TF_AWS_STS_ENDPOINT"));
        assert_eq!(sts.deprecated_env_var(), Some("AWS_STS_ENDPOINT"));
    }

    #[test]
    fn test_builtin_transcribe_alias() {
        let table = default_alias_table().unwrap();
        assert_eq!(table.canonical_of("transcribeservice"), "transcribe");
        assert_eq!(table.aliases_of("transcribe").len(), 1);
        assert!(table
            .service("transcribe")
            .unwrap()
            .tf_aws_env_var()
            .is_none());
    }
}
